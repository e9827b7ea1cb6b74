use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Reasons a brand name is rejected. The `Display` text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandNameError {
    #[error("Brand name is required")]
    Required,

    #[error("Brand name must be at least 2 characters")]
    TooShort,

    #[error("Brand name must be less than 100 characters")]
    TooLong,

    #[error("Brand name contains inappropriate language")]
    Inappropriate,
}
