use serde::{Deserialize, Serialize};

/// A generated brief: a few sentences plus exactly three content angles and
/// three creator criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignBrief {
    pub brief: String,
    pub angles: [String; 3],
    pub criteria: [String; 3],
}

/// Informational timings and token counts for one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationMetrics {
    pub latency_ms: u64,
    pub tokens_in: u64,
    pub tokens_out: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBrief {
    pub brief: CampaignBrief,
    pub metrics: GenerationMetrics,
}

// ---------------------------------------------------------------------------
// Chat-completions wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub tools: Vec<serde_json::Value>,
    pub tool_choice: serde_json::Value,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantMessage {
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FunctionCall {
    #[serde(default)]
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorDetail {
    pub message: String,
}

/// Tool-call arguments before shape checks. Every field is optional so a
/// missing key is distinguishable from a malformed payload.
#[derive(Debug, Deserialize)]
pub(crate) struct BriefArguments {
    pub brief: Option<String>,
    pub angles: Option<Vec<String>>,
    pub criteria: Option<Vec<String>>,
}
