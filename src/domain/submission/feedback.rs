//! Failure classification and the text shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing toast messages.
pub mod messages {
    pub const SUCCESS: &str = "Thank you! We'll be in touch soon.";
    pub const CONNECTIVITY: &str =
        "Unable to reach the server. Please check your connection and try again.";
    pub const TIMEOUT: &str = "The request timed out. Please try again.";
    pub const GENERIC: &str = "Something went wrong. Please try again.";
    /// Detail carried by the `form-success` notification.
    pub const SUBMITTED: &str = "Form submitted successfully";
}

/// How a failed attempt is described to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Connectivity,
    Timeout,
    Generic,
}

impl FailureKind {
    /// Toast text for this failure. A generic failure whose server response
    /// explained itself shows that explanation instead of the stock text.
    pub fn user_message(self, server_message: Option<&str>) -> String {
        match self {
            FailureKind::Connectivity => messages::CONNECTIVITY.to_string(),
            FailureKind::Timeout => messages::TIMEOUT.to_string(),
            FailureKind::Generic => match server_message.map(str::trim) {
                Some(message) if !message.is_empty() => format!("Error: {}", message),
                _ => messages::GENERIC.to_string(),
            },
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Connectivity => "connectivity",
            FailureKind::Timeout => "timeout",
            FailureKind::Generic => "generic",
        };
        write!(f, "{}", s)
    }
}
