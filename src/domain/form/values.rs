//! FormState - the current value of every field in the form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FieldDefinition;
use super::step::FormDefinition;

/// Current value of one field: text for inputs and radio groups
/// (the checked member's value), a flag for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Initial value for a field: its default, an empty string, or unchecked.
    pub fn initial(field: &FieldDefinition) -> Self {
        if field.is_checkbox() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(field.default_value.clone().unwrap_or_default())
        }
    }

    /// String form used by the validator. Checked boxes read as "on".
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(true) => "on",
            FieldValue::Flag(false) => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    /// True for empty or whitespace-only text and unchecked boxes.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

/// Mutable map of field key → current value.
///
/// Every key declared by the definition has an entry from construction on;
/// unknown keys are never inserted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Creates the initial state for a definition.
    pub fn initial(definition: &FormDefinition) -> Self {
        let values = definition
            .fields()
            .map(|f| (f.key.clone(), FieldValue::initial(f)))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Text of a field, or "" for unknown keys and unchecked boxes.
    pub fn text(&self, key: &str) -> &str {
        self.values.get(key).map(FieldValue::as_str).unwrap_or("")
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(FieldValue::is_checked)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Replaces the value of an existing key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: FieldValue) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Empties a text field (or unchecks a box). Returns true if it held data.
    pub fn clear(&mut self, key: &str) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                let had_data = !slot.is_blank();
                *slot = if matches!(slot, FieldValue::Flag(_)) {
                    FieldValue::Flag(false)
                } else {
                    FieldValue::Text(String::new())
                };
                had_data
            }
            None => false,
        }
    }

    /// Restores every field to its initial value.
    pub fn reset(&mut self, definition: &FormDefinition) {
        *self = Self::initial(definition);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
