//! Wizard errors.

use serde::Serialize;
use thiserror::Error;

use crate::domain::form::FieldKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// One field that failed validation, with the message shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub key: String,
    pub label: String,
    pub message: String,
}

impl FieldFailure {
    pub fn new(key: impl Into<String>, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            message: message.into(),
        }
    }
}

/// The active step did not pass its gate; navigation did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Step {step} has {} invalid field(s)", .failures.len())]
pub struct StepValidationError {
    pub step: usize,
    pub failures: Vec<FieldFailure>,
}

impl StepValidationError {
    /// Key of the first failing field, the one the host should focus.
    pub fn first_key(&self) -> Option<&str> {
        self.failures.first().map(|f| f.key.as_str())
    }
}

/// Rejected navigation requests and field events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Step {index} is not an editable step (last editable step is {last})")]
    StepOutOfRange { index: usize, last: usize },

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Field '{0}' is hidden and does not accept input")]
    HiddenField(String),

    #[error("'{value}' is not an option of '{key}'")]
    UnknownOption { key: String, value: String },

    #[error("Field '{key}' is a {kind} field and does not accept {event} events")]
    KindMismatch {
        key: String,
        kind: FieldKind,
        event: &'static str,
    },
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let code = match &err {
            WizardError::StepOutOfRange { .. } => ErrorCode::StepOutOfRange,
            WizardError::UnknownField(_) => ErrorCode::UnknownField,
            WizardError::UnknownOption { .. } => ErrorCode::UnknownOption,
            WizardError::HiddenField(_) => ErrorCode::ValidationFailed,
            WizardError::KindMismatch { .. } => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<StepValidationError> for DomainError {
    fn from(err: StepValidationError) -> Self {
        err.failures.iter().fold(
            DomainError::new(ErrorCode::ValidationFailed, err.to_string()),
            |acc, f| acc.with_detail(f.key.clone(), f.message.clone()),
        )
    }
}
