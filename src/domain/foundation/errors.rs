//! Coded error shared by the foundation, ports and adapters.
//!
//! Module-specific failures (`WizardError`, `TransportError`, ...) convert
//! into `DomainError` when they need to cross a port.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Stable machine-readable code, rendered in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    UnknownField,
    UnknownOption,

    // State errors
    InvalidStateTransition,
    StepOutOfRange,
    SubmissionInFlight,

    // Integration errors
    TransportFailed,
    EventPublishFailed,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::UnknownOption => "UNKNOWN_OPTION",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StepOutOfRange => "STEP_OUT_OF_RANGE",
            ErrorCode::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            ErrorCode::TransportFailed => "TRANSPORT_FAILED",
            ErrorCode::EventPublishFailed => "EVENT_PUBLISH_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Code, human message and string details such as the offending field.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// `ValidationFailed` with the field key recorded under "field".
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::StepOutOfRange, "Step 9 does not exist");
        assert_eq!(format!("{}", err), "[STEP_OUT_OF_RANGE] Step 9 does not exist");
    }

    #[test]
    fn validation_constructor_records_field() {
        let err = DomainError::validation("email", "Please enter a valid email address");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"email".to_string()));
    }

    #[test]
    fn with_detail_accumulates() {
        let err = DomainError::new(ErrorCode::TransportFailed, "Server error")
            .with_detail("status", "500")
            .with_detail("endpoint", "http://localhost:5000/api/leads");

        assert_eq!(err.details.len(), 2);
        assert_eq!(err.details.get("status"), Some(&"500".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SubmissionInFlight), "SUBMISSION_IN_FLIGHT");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
