//! SubmissionTransport port - Delivers the payload to the remote endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::submission::{FailureKind, SubmissionPayload};

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// HTTP status (any 2xx) or an adapter-specific success code.
    pub status: u16,
    /// Response body, when the endpoint returned JSON.
    pub body: Option<JsonValue>,
}

impl Ack {
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Why a delivery attempt failed. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The endpoint could not be reached.
    #[error("unable to reach {endpoint}: {message}")]
    Connectivity { endpoint: String, message: String },

    /// No response within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-2xx response. `message` is the body's `message` field, if any.
    #[error("server rejected submission with status {status}: {}", .message.as_deref().unwrap_or("Server error"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A response arrived but could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The transport could not be constructed or the request not built.
    #[error("transport misconfigured: {0}")]
    Configuration(String),
}

impl TransportError {
    /// Classification used to pick the user-facing message.
    pub fn kind(&self) -> FailureKind {
        match self {
            TransportError::Connectivity { .. } => FailureKind::Connectivity,
            TransportError::Timeout { .. } => FailureKind::Timeout,
            TransportError::Rejected { .. }
            | TransportError::Malformed(_)
            | TransportError::Configuration(_) => FailureKind::Generic,
        }
    }

    /// Explanation supplied by the server, if it gave one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Toast text for this failure.
    pub fn user_message(&self) -> String {
        self.kind().user_message(self.server_message())
    }
}

/// Port for delivering a submission.
///
/// Each call is a single attempt with exactly one resolution. Callers
/// guarantee at most one attempt is outstanding per widget.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError>;

    /// Where submissions go, for logging.
    fn endpoint(&self) -> &str;
}
