use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, LlmSettings};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Nothing is strictly required: a missing `OPENAI_API_KEY` selects stub
/// generation instead of failing startup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        or_default(var, default)
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BRIEFGEN_ENV", "development"))?;
    let bind_addr = parse_addr("BRIEFGEN_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("BRIEFGEN_LOG_LEVEL", "info");
    let static_dir = optional("BRIEFGEN_STATIC_DIR").map(PathBuf::from);

    let temperature = parse_f32("BRIEFGEN_LLM_TEMPERATURE", "0.3")?;
    if !(0.0..=2.0).contains(&temperature) {
        return Err(invalid(
            "BRIEFGEN_LLM_TEMPERATURE",
            format!("must be between 0.0 and 2.0, got {temperature}"),
        ));
    }

    let timeout_secs = parse_u64("BRIEFGEN_LLM_TIMEOUT_SECS", "60")?;
    if timeout_secs == 0 {
        return Err(invalid(
            "BRIEFGEN_LLM_TIMEOUT_SECS",
            "must be at least 1 second".to_string(),
        ));
    }

    let llm = LlmSettings {
        api_key: optional("OPENAI_API_KEY"),
        base_url: or_default("BRIEFGEN_LLM_BASE_URL", LlmSettings::DEFAULT_BASE_URL),
        model: or_default("BRIEFGEN_LLM_MODEL", LlmSettings::DEFAULT_MODEL),
        temperature,
        max_tokens: parse_u32("BRIEFGEN_LLM_MAX_TOKENS", "800")?,
        timeout_secs,
        stub_delay_ms: parse_u64("BRIEFGEN_STUB_DELAY_MS", "500")?,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        static_dir,
        llm,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRIEFGEN_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
