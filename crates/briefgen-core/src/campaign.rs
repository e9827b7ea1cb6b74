//! Campaign request types and the four-field input validator.

use serde::{Deserialize, Serialize};

use crate::profanity::validate_brand_name;

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact label accepted on input and echoed in prompts.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Case-sensitive lookup by label.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn invalid_message() -> String {
                let labels = Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} must be one of: {labels}", $field)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum!(
    /// Where the campaign content will run.
    Platform, "Platform", {
        Instagram => "Instagram",
        TikTok => "TikTok",
        Ugc => "UGC",
    }
);

labelled_enum!(
    /// What the campaign is meant to achieve.
    Goal, "Goal", {
        Awareness => "Awareness",
        Conversions => "Conversions",
        ContentAssets => "Content Assets",
    }
);

labelled_enum!(
    /// Voice of the generated brief.
    Tone, "Tone", {
        Professional => "Professional",
        Friendly => "Friendly",
        Playful => "Playful",
    }
);

/// Raw request fields as received, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignInput {
    pub brand_name: String,
    pub platform: String,
    pub goal: String,
    pub tone: String,
}

impl CampaignInput {
    /// Pull the four fields out of an arbitrary JSON value.
    ///
    /// Missing or non-string fields read as empty, and so does every field
    /// of a non-object value; the validator then reports them.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            brand_name: field("brand_name"),
            platform: field("platform"),
            goal: field("goal"),
            tone: field("tone"),
        }
    }
}

/// A validated campaign request. Only [`validate_input`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRequest {
    pub brand_name: String,
    pub platform: Platform,
    pub goal: Goal,
    pub tone: Tone,
}

/// Every rule a [`CampaignInput`] broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate all four fields, collecting every failure instead of stopping
/// at the first.
///
/// # Errors
///
/// Returns [`ValidationErrors`] (never empty) when any field is invalid.
pub fn validate_input(input: &CampaignInput) -> Result<CampaignRequest, ValidationErrors> {
    let mut errors = Vec::new();

    let brand_name = input.brand_name.trim();
    if let Err(e) = validate_brand_name(brand_name) {
        errors.push(e.to_string());
    }

    let platform = Platform::from_label(&input.platform);
    if platform.is_none() {
        errors.push(Platform::invalid_message());
    }

    let goal = Goal::from_label(&input.goal);
    if goal.is_none() {
        errors.push(Goal::invalid_message());
    }

    let tone = Tone::from_label(&input.tone);
    if tone.is_none() {
        errors.push(Tone::invalid_message());
    }

    match (platform, goal, tone) {
        (Some(platform), Some(goal), Some(tone)) if errors.is_empty() => Ok(CampaignRequest {
            brand_name: brand_name.to_string(),
            platform,
            goal,
            tone,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
