//! Campaign brief generation.
//!
//! Builds the prompt and function-tool schema for a validated
//! [`briefgen_core::CampaignRequest`], calls an OpenAI-compatible
//! chat-completions endpoint, and parses the forced tool call into a
//! [`CampaignBrief`]. Without a configured API key the generator answers
//! with a deterministic templated brief instead.

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod stub;
pub mod types;

pub use client::OpenAiClient;
pub use error::LlmError;
pub use generator::BriefGenerator;
pub use types::{CampaignBrief, GeneratedBrief, GenerationMetrics};
