//! Submission endpoint configuration

use reqwest::header::HeaderName;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

use super::error::ValidationError;
use crate::adapters::HttpTransportConfig;

/// Where and how submissions are delivered. One timeout applies to
/// every request.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra request headers. `Content-Type: application/json` is always sent.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Transport settings derived from this section.
    pub fn http_transport(&self) -> HttpTransportConfig {
        HttpTransportConfig::new(&self.api_url)
            .with_timeout(self.timeout())
            .with_headers(self.headers.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = Url::parse(&self.api_url)
            .map_err(|_| ValidationError::InvalidApiUrl(self.api_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(name) = self
            .headers
            .keys()
            .find(|name| HeaderName::from_bytes(name.as_bytes()).is_err())
        {
            return Err(ValidationError::InvalidHeader(name.clone()));
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:5000/api/leads".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
