//! `POST /api/generate-brief`: validate a campaign request and generate a brief.

use axum::{body::Bytes, extract::State, Json};
use briefgen_core::{validate_input, CampaignInput};
use briefgen_llm::{CampaignBrief, GeneratedBrief, GenerationMetrics};
use serde::Serialize;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(in crate::api) struct BriefResponse {
    success: bool,
    data: CampaignBrief,
    metrics: GenerationMetrics,
}

impl From<GeneratedBrief> for BriefResponse {
    fn from(generated: GeneratedBrief) -> Self {
        Self {
            success: true,
            data: generated.brief,
            metrics: generated.metrics,
        }
    }
}

/// The body is read as raw bytes so malformed JSON maps to our own 400
/// body rather than axum's extractor rejection.
pub(in crate::api) async fn generate_brief(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BriefResponse>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed JSON body");
        ApiError::new("bad_request", "Invalid JSON format")
    })?;

    let request = validate_input(&CampaignInput::from_json(&value)).map_err(|e| {
        tracing::warn!(errors = %e, "validation failed");
        ApiError::new("validation_error", e.to_string())
    })?;

    // BriefGenerator logs provider failures with full detail.
    let generated = state
        .generator
        .generate(&request)
        .await
        .map_err(|e| ApiError::new("generation_failed", format!("Failed to generate brief: {e}")))?;

    Ok(Json(generated.into()))
}
