use std::time::Duration;

use briefgen_core::{CampaignRequest, LlmSettings};

use crate::client::OpenAiClient;
use crate::error::LlmError;
use crate::stub::{stub_brief, STUB_METRICS};
use crate::types::GeneratedBrief;

/// Produces briefs from the live provider, or from the stub template when
/// no API key is configured.
pub struct BriefGenerator {
    client: Option<OpenAiClient>,
    stub_delay: Duration,
}

impl BriefGenerator {
    /// Builds a generator from settings. A missing key selects stub mode.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the HTTP client cannot be constructed.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmError> {
        let client = settings
            .api_key
            .as_deref()
            .map(|key| OpenAiClient::new(key, settings))
            .transpose()?;

        if client.is_none() {
            tracing::warn!("OPENAI_API_KEY not configured; briefs will use the stub template");
        }

        Ok(Self {
            client,
            stub_delay: Duration::from_millis(settings.stub_delay_ms),
        })
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Generates one brief. Provider failures are logged here and returned
    /// unchanged; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns the [`LlmError`] from the provider call. Stub mode never fails.
    pub async fn generate(&self, request: &CampaignRequest) -> Result<GeneratedBrief, LlmError> {
        match &self.client {
            None => {
                tokio::time::sleep(self.stub_delay).await;
                tracing::info!(brand = %request.brand_name, "using stub brief (no API key configured)");
                Ok(GeneratedBrief {
                    brief: stub_brief(request),
                    metrics: STUB_METRICS,
                })
            }
            Some(client) => {
                let result = client.generate_brief(request).await;
                match &result {
                    Ok(generated) => tracing::info!(
                        brand = %request.brand_name,
                        latency_ms = generated.metrics.latency_ms,
                        tokens_in = generated.metrics.tokens_in,
                        tokens_out = generated.metrics.tokens_out,
                        "brief generated"
                    ),
                    Err(e) => tracing::error!(
                        error = %e,
                        detail = ?e,
                        brand = %request.brand_name,
                        "LLM generation failed"
                    ),
                }
                result
            }
        }
    }
}
