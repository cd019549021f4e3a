//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Form title must not be empty")]
    EmptyTitle,

    #[error("Invalid submission URL '{0}'")]
    InvalidApiUrl(String),

    #[error("Submission URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Submission timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Invalid submission header '{0}'")]
    InvalidHeader(String),

    #[error("Notification display duration must be greater than zero")]
    InvalidDisplayDuration,
}
