//! Widget configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates.
//! Environment variables use the `INQUIRY_WIZARD` prefix and `__` between
//! nested keys. Every value has a default, so an empty environment yields
//! a working widget pointed at the local placeholder endpoint.
//!
//! # Example
//!
//! ```no_run
//! use inquiry_wizard::config::WidgetConfig;
//!
//! let config = WidgetConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Submitting to {}", config.submission.api_url);
//! ```

mod appearance;
mod error;
mod form;
mod logging;
mod notifications;
mod submission;

pub use appearance::AppearanceConfig;
pub use error::{ConfigError, ValidationError};
pub use form::FormConfig;
pub use logging::LoggingConfig;
pub use notifications::NotificationConfig;
pub use submission::SubmissionConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "INQUIRY_WIZARD";
const ENV_SEPARATOR: &str = "__";

/// Root widget configuration, read once at mount.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetConfig {
    /// Title, subtitle and form variant
    #[serde(default)]
    pub form: FormConfig,

    /// Endpoint, timeout and headers
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Theme and cosmetic overrides
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Toast timing
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WidgetConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present
    /// 2. Reads variables with the `INQUIRY_WIZARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `INQUIRY_WIZARD__SUBMISSION__API_URL=...` -> `submission.api_url`
    /// - `INQUIRY_WIZARD__FORM__INCLUDE_BUSINESS_STEP=false` -> `form.include_business_step`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load from a file (TOML, JSON or YAML by extension), with environment
    /// variables layered on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or unparsable, or a
    /// value cannot be parsed into its type.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.form.validate()?;
        self.submission.validate()?;
        self.notifications.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}
