//! Deterministic brief used when no provider credential is configured.

use briefgen_core::{CampaignRequest, Tone};

use crate::types::{CampaignBrief, GenerationMetrics};

/// Metrics reported for every stub brief, regardless of the actual delay.
pub const STUB_METRICS: GenerationMetrics = GenerationMetrics {
    latency_ms: 500,
    tokens_in: 0,
    tokens_out: 0,
};

#[must_use]
pub fn stub_brief(request: &CampaignRequest) -> CampaignBrief {
    let brand = &request.brand_name;
    let platform = request.platform;
    let goal = request.goal.as_str().to_lowercase();
    let tone = request.tone.as_str().to_lowercase();

    let opening = match request.tone {
        Tone::Professional => format!("{brand} seeks to establish thought leadership on {platform}."),
        Tone::Friendly => {
            format!("{brand} wants to connect authentically with audiences on {platform}.")
        }
        Tone::Playful => format!("{brand} is ready to make a splash on {platform} with fun content!"),
    };

    CampaignBrief {
        brief: format!(
            "{opening} This {goal}-focused campaign will leverage creator partnerships to deliver \
             compelling content that resonates with target audiences. \
             The brand aims to maintain a {tone} voice throughout. \
             Success metrics will track engagement and alignment with brand values."
        ),
        angles: [
            format!("Behind-the-scenes look at {brand}'s mission and values"),
            format!("User testimonials and authentic {platform} stories"),
            "Educational content highlighting product benefits".to_string(),
        ],
        criteria: [
            format!("Active {platform} presence with engaged audience"),
            format!("Content style aligns with {tone} brand tone"),
            format!("Track record of {goal}-driven campaigns"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use briefgen_core::{Goal, Platform};

    use super::*;

    fn request(tone: Tone) -> CampaignRequest {
        CampaignRequest {
            brand_name: "Acme".to_string(),
            platform: Platform::Instagram,
            goal: Goal::ContentAssets,
            tone,
        }
    }

    #[test]
    fn opening_sentence_follows_tone() {
        assert!(stub_brief(&request(Tone::Professional))
            .brief
            .starts_with("Acme seeks to establish thought leadership on Instagram."));
        assert!(stub_brief(&request(Tone::Friendly))
            .brief
            .starts_with("Acme wants to connect authentically with audiences on Instagram."));
        assert!(stub_brief(&request(Tone::Playful))
            .brief
            .starts_with("Acme is ready to make a splash on Instagram with fun content!"));
    }

    #[test]
    fn goal_and_tone_are_lowercased() {
        let brief = stub_brief(&request(Tone::Friendly));
        assert!(brief
            .brief
            .contains("This content assets-focused campaign"));
        assert!(brief.brief.contains("maintain a friendly voice"));
        assert_eq!(brief.criteria[1], "Content style aligns with friendly brand tone");
        assert_eq!(brief.criteria[2], "Track record of content assets-driven campaigns");
    }

    #[test]
    fn angles_interpolate_brand_and_platform() {
        let brief = stub_brief(&request(Tone::Professional));
        assert_eq!(
            brief.angles[0],
            "Behind-the-scenes look at Acme's mission and values"
        );
        assert_eq!(
            brief.angles[1],
            "User testimonials and authentic Instagram stories"
        );
    }

    #[test]
    fn stub_is_deterministic() {
        let req = request(Tone::Playful);
        assert_eq!(stub_brief(&req), stub_brief(&req));
    }
}
