//! Field decoration state.

use serde::Serialize;

/// Decoration of a single field.
///
/// A field stays `Untouched` until it is blurred, fails a gate, or is
/// re-checked while invalid. Untouched fields render neutral even when
/// empty and required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// The inline error message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_untouched() {
        assert_eq!(FieldStatus::default(), FieldStatus::Untouched);
    }

    #[test]
    fn only_invalid_carries_message() {
        assert_eq!(FieldStatus::Invalid("bad".into()).message(), Some("bad"));
        assert_eq!(FieldStatus::Valid.message(), None);
        assert!(!FieldStatus::Untouched.is_invalid());
    }
}
