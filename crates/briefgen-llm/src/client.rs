//! HTTP client for an OpenAI-compatible chat-completions endpoint.
//!
//! Sends one forced function-tool request per brief and turns the reply
//! into a [`GeneratedBrief`]. There is no retry: every failure is returned
//! to the caller as an [`LlmError`].

use std::time::{Duration, Instant};

use briefgen_core::{CampaignRequest, LlmSettings};
use reqwest::Client;

use crate::error::LlmError;
use crate::prompt::{brief_tool, build_user_prompt, forced_tool_choice, SYSTEM_PROMPT};
use crate::types::{
    BriefArguments, CampaignBrief, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    GeneratedBrief, GenerationMetrics, ProviderErrorBody,
};

/// Longest slice of a raw provider payload copied into logs and errors.
const MAX_LOGGED_CHARS: usize = 200;

pub struct OpenAiClient {
    client: Client,
    api_key: String,
    completions_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Creates a client from provider settings and an API key.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, settings: &LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("briefgen/0.1 (campaign-briefs)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            completions_url: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    /// Requests a brief for `request` and measures the round trip.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure or timeout.
    /// - [`LlmError::Api`] on a non-2xx status (bad key, rate limit, outage).
    /// - [`LlmError::Deserialize`] if the envelope is not a chat completion.
    /// - [`LlmError::NoChoices`] / [`LlmError::NoToolCalls`] if the reply has
    ///   no tool invocation.
    /// - [`LlmError::InvalidArguments`] / [`LlmError::Incomplete`] if the tool
    ///   arguments are not a complete brief.
    pub async fn generate_brief(
        &self,
        request: &CampaignRequest,
    ) -> Result<GeneratedBrief, LlmError> {
        let user_prompt = build_user_prompt(request);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            tools: vec![brief_tool()],
            tool_choice: forced_tool_choice(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let started = Instant::now();
        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(&text),
            });
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Deserialize {
                context: "chat completion".to_string(),
                source: e,
            })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::NoChoices)?;
        let call = choice
            .message
            .tool_calls
            .and_then(|calls| calls.into_iter().next())
            .ok_or(LlmError::NoToolCalls)?;
        tracing::debug!(tool = %call.function.name, latency_ms, "received tool call");

        let brief = parse_brief_arguments(&call.function.arguments)?;
        let usage = completion.usage.unwrap_or_default();

        Ok(GeneratedBrief {
            brief,
            metrics: GenerationMetrics {
                latency_ms,
                tokens_in: usage.prompt_tokens,
                tokens_out: usage.completion_tokens,
            },
        })
    }
}

/// Parse and shape-check the JSON string carried in a tool call.
pub(crate) fn parse_brief_arguments(raw: &str) -> Result<CampaignBrief, LlmError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| invalid_arguments(raw, e))?;
    if !value.is_object() {
        return Err(invalid_arguments(
            raw,
            serde::de::Error::custom("tool arguments must be a JSON object"),
        ));
    }
    let args: BriefArguments =
        serde_json::from_value(value).map_err(|e| invalid_arguments(raw, e))?;

    let missing: Vec<&str> = [
        ("brief", args.brief.is_none()),
        ("angles", args.angles.is_none()),
        ("criteria", args.criteria.is_none()),
    ]
    .into_iter()
    .filter_map(|(key, absent)| absent.then_some(key))
    .collect();

    match (args.brief, args.angles, args.criteria) {
        (Some(brief), Some(angles), Some(criteria)) => Ok(CampaignBrief {
            brief,
            angles: exactly_three("angles", angles)?,
            criteria: exactly_three("criteria", criteria)?,
        }),
        _ => {
            let reason = format!("missing required fields: {}", missing.join(", "));
            tracing::error!(%reason, "incomplete tool arguments");
            Err(LlmError::Incomplete { reason })
        }
    }
}

fn invalid_arguments(raw: &str, source: serde_json::Error) -> LlmError {
    tracing::error!(error = %source, raw = %truncate(raw), "tool arguments are not a valid object");
    LlmError::InvalidArguments { source }
}

fn exactly_three(field: &str, items: Vec<String>) -> Result<[String; 3], LlmError> {
    <[String; 3]>::try_from(items).map_err(|items| {
        let reason = format!("expected 3 {field}, got {}", items.len());
        tracing::error!(%reason, "incomplete tool arguments");
        LlmError::Incomplete { reason }
    })
}

/// Best-effort human message from a provider error body.
fn provider_error_message(body: &str) -> String {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => truncate(body),
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(MAX_LOGGED_CHARS).collect()
}
