//! HTTP submission transport.
//!
//! POSTs the payload as JSON to the configured endpoint. Any 2xx is an
//! acknowledgement; other statuses are rejections whose body may carry a
//! `message` for the user. One timeout applies to every request.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::submission::SubmissionPayload;
use crate::ports::{Ack, SubmissionTransport, TransportError};

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Submission endpoint.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl HttpTransportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
            headers: BTreeMap::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// Error body returned by the endpoint on rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest-backed `SubmissionTransport`.
pub struct HttpSubmissionTransport {
    config: HttpTransportConfig,
    client: Client,
}

impl HttpSubmissionTransport {
    /// Builds the client with the configured timeout and headers.
    ///
    /// # Errors
    ///
    /// `TransportError::Configuration` for an invalid header or a client
    /// that cannot be constructed.
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                TransportError::Configuration(format!("invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                TransportError::Configuration(format!("invalid value for header '{}': {}", name, e))
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    fn map_send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_builder() {
            TransportError::Configuration(e.to_string())
        } else {
            TransportError::Connectivity {
                endpoint: self.config.endpoint.clone(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpSubmissionTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else {
                TransportError::Malformed(format!("Failed to read response body: {}", e))
            }
        })?;

        if status.is_success() {
            let ack = Ack::new(status.as_u16());
            return Ok(match serde_json::from_str(&body) {
                Ok(json) => ack.with_body(json),
                Err(_) => ack,
            });
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}
