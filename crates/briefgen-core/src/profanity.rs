//! Brand-name screening: text normalization and a substring profanity filter.
//!
//! Matching is deliberately substring-based (not word-bounded) so that
//! obfuscations such as `f.u.c.k` or `shiiit` still hit after normalization.
//! The safe-word list exists to cancel the most common false positives.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::error::BrandNameError;

pub const BRAND_NAME_MIN_CHARS: usize = 2;
pub const BRAND_NAME_MAX_CHARS: usize = 100;

/// Tokens rejected anywhere inside a normalized string.
pub const BANNED_WORDS: &[&str] = &[
    "fuck", "fuk", "fuc", "fucc", "fuckin", "fucking", "fck", //
    "shit", "sh1t", "shitt", "bullshit", "sht", //
    "bitch", "biatch", "biches", "bitches", "btch", "b1tch", //
    "ass", "asses", "asshole", "ashole", //
    "damn", "dammit", "crap", "bastard", //
    "piss", "pissed", //
    "dick", "d1ck", "dik", "dicks", "dck", //
    "cock", "kock", "kok", "cck",
];

/// Substrings that clear a string even when it also contains a banned token.
pub const SAFE_WORDS: &[&str] = &[
    "class",
    "classic",
    "pass",
    "assistant",
    "compassion",
    "assembly",
    "assassin",
];

static BANNED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BANNED_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)({alternation})")).expect("valid regex")
});

/// Reduce text to lowercase ASCII letters, digits and whitespace.
///
/// Accents are decomposed away before filtering so `à` becomes `a` instead
/// of disappearing, then runs of a repeated character collapse to one.
///
/// ```
/// assert_eq!(briefgen_core::normalize("Pàssss"), "pas");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut collapsed = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    for c in text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
    {
        if last != Some(c) {
            collapsed.push(c);
            last = Some(c);
        }
    }

    collapsed.to_ascii_lowercase().trim().to_string()
}

fn is_safe_word(normalized: &str) -> bool {
    SAFE_WORDS.iter().any(|sw| normalized.contains(sw))
}

/// True when the normalized form of `text` contains a banned token and no
/// safe word.
#[must_use]
pub fn contains_profanity(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let cleaned = normalize(text);
    if is_safe_word(&cleaned) {
        return false;
    }

    BANNED_RE.is_match(&cleaned)
}

/// Check a brand name for presence, length bounds and profanity.
///
/// Length is counted in characters after trimming.
///
/// # Errors
///
/// Returns the first [`BrandNameError`] the name violates.
pub fn validate_brand_name(brand_name: &str) -> Result<(), BrandNameError> {
    let clean = brand_name.trim();
    if clean.is_empty() {
        return Err(BrandNameError::Required);
    }

    let len = clean.chars().count();
    if len < BRAND_NAME_MIN_CHARS {
        return Err(BrandNameError::TooShort);
    }
    if len > BRAND_NAME_MAX_CHARS {
        return Err(BrandNameError::TooLong);
    }

    if contains_profanity(clean) {
        return Err(BrandNameError::Inappropriate);
    }

    Ok(())
}

#[cfg(test)]
#[path = "profanity_test.rs"]
mod tests;
