//! Domain types, configuration, and input validation for briefgen.
//!
//! Everything here is synchronous and free of I/O apart from reading
//! environment variables, so the server, the CLI and the LLM crate can all
//! share one validation path.

pub mod app_config;
pub mod campaign;
pub mod config;
pub mod error;
pub mod profanity;

pub use app_config::{AppConfig, Environment, LlmSettings};
pub use campaign::{
    validate_input, CampaignInput, CampaignRequest, Goal, Platform, Tone, ValidationErrors,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{BrandNameError, ConfigError};
pub use profanity::{contains_profanity, normalize, validate_brand_name};
