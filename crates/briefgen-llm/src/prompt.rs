//! Prompt text and the function-tool schema sent with every live request.

use briefgen_core::CampaignRequest;
use serde_json::{json, Value};

/// Name of the single function tool the model is forced to call.
pub const BRIEF_TOOL_NAME: &str = "generate_campaign_brief";

pub const SYSTEM_PROMPT: &str = "You are a campaign brief generator for an influencer marketing platform.
Generate concise, professional campaign briefs based on brand requirements.
Always return exactly 3 content angles and 3 creator criteria.
Keep briefs between 4-6 sentences. Be specific and actionable.";

#[must_use]
pub fn build_user_prompt(request: &CampaignRequest) -> String {
    format!(
        "Create a campaign brief for {brand}.
Platform: {platform}
Goal: {goal}
Tone: {tone}

Provide:
1. A brief (4-6 sentences) describing the campaign
2. Three specific content angles
3. Three creator selection criteria",
        brand = request.brand_name,
        platform = request.platform,
        goal = request.goal,
        tone = request.tone,
    )
}

/// The `tools[]` entry describing the structured brief.
#[must_use]
pub fn brief_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": BRIEF_TOOL_NAME,
            "description": "Generate a structured campaign brief with angles and criteria",
            "parameters": {
                "type": "object",
                "properties": {
                    "brief": {
                        "type": "string",
                        "description": "4-6 sentence campaign brief"
                    },
                    "angles": {
                        "type": "array",
                        "description": "Three content angle suggestions",
                        "items": { "type": "string" },
                        "minItems": 3,
                        "maxItems": 3
                    },
                    "criteria": {
                        "type": "array",
                        "description": "Three creator selection criteria",
                        "items": { "type": "string" },
                        "minItems": 3,
                        "maxItems": 3
                    }
                },
                "required": ["brief", "angles", "criteria"]
            }
        }
    })
}

/// `tool_choice` value forcing the model to answer through [`brief_tool`].
#[must_use]
pub fn forced_tool_choice() -> Value {
    json!({
        "type": "function",
        "function": { "name": BRIEF_TOOL_NAME }
    })
}
