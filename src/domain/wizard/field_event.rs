//! Field change notifications delivered by the host.

use serde::{Deserialize, Serialize};

/// One user interaction with a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FieldEvent {
    /// Text typed into an input or textarea.
    Input { key: String, value: String },
    /// Checkbox checked or unchecked.
    Toggle { key: String, checked: bool },
    /// Radio group member selected.
    Select { key: String, value: String },
    /// Focus left the field.
    Blur { key: String },
}

impl FieldEvent {
    pub fn input(key: impl Into<String>, value: impl Into<String>) -> Self {
        FieldEvent::Input {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn toggle(key: impl Into<String>, checked: bool) -> Self {
        FieldEvent::Toggle {
            key: key.into(),
            checked,
        }
    }

    pub fn select(key: impl Into<String>, value: impl Into<String>) -> Self {
        FieldEvent::Select {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn blur(key: impl Into<String>) -> Self {
        FieldEvent::Blur { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            FieldEvent::Input { key, .. }
            | FieldEvent::Toggle { key, .. }
            | FieldEvent::Select { key, .. }
            | FieldEvent::Blur { key } => key,
        }
    }

    /// Short name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            FieldEvent::Input { .. } => "input",
            FieldEvent::Toggle { .. } => "toggle",
            FieldEvent::Select { .. } => "select",
            FieldEvent::Blur { .. } => "blur",
        }
    }
}
