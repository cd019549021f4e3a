//! Field validator - pure rules judging one field's value.
//!
//! Rules run in priority order and the first failing rule wins:
//! 1. required + blank
//! 2. email shape
//! 3. phone shape (required phones only)
//! 4. website address shape
//! 5. ZIP shape
//! 6. minimum length
//!
//! Callers apply the returned result to presentation; nothing here has
//! side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use super::field::{FieldDefinition, FieldKind};

/// User-facing validation messages.
pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const SELECT_OPTION: &str = "Please select an option";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address";
    pub const INVALID_PHONE: &str = "Please enter a valid phone number";
    pub const INVALID_URL: &str = "Please enter a valid website address";
    pub const INVALID_ZIP: &str = "Please enter a valid ZIP code";

    pub fn too_short(min: usize) -> String {
        format!("Please enter at least {} characters", min)
    }
}

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern is valid"));
static ZIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern is valid"));
static SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid"));
static DOMAIN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z]{2,}").expect("suffix pattern is valid"));

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Validates `value` against the rules of `field`.
pub fn validate(field: &FieldDefinition, value: &str) -> ValidationResult {
    run_rules(field, value, field.is_required())
}

/// Validates as though the field were required, for fields that become
/// mandatory through a conditional trigger.
pub fn validate_as_required(field: &FieldDefinition, value: &str) -> ValidationResult {
    run_rules(field, value, true)
}

fn run_rules(field: &FieldDefinition, value: &str, required: bool) -> ValidationResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return if !required {
            ValidationResult::valid()
        } else if field.is_radio() {
            ValidationResult::invalid(messages::SELECT_OPTION)
        } else {
            ValidationResult::invalid(messages::REQUIRED)
        };
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => {
            return ValidationResult::invalid(messages::INVALID_EMAIL)
        }
        FieldKind::Phone if required && !is_valid_phone(value) => {
            return ValidationResult::invalid(messages::INVALID_PHONE)
        }
        FieldKind::Url if !is_valid_url(trimmed) => {
            return ValidationResult::invalid(messages::INVALID_URL)
        }
        FieldKind::Zip if !is_valid_zip(trimmed) => {
            return ValidationResult::invalid(messages::INVALID_ZIP)
        }
        FieldKind::Radio if !field.has_option(value) => {
            return ValidationResult::invalid(messages::SELECT_OPTION)
        }
        _ => {}
    }

    if let Some(min) = field.min_length {
        if trimmed.chars().count() < min {
            return ValidationResult::invalid(messages::too_short(min));
        }
    }

    ValidationResult::valid()
}

/// `local@domain.tld`: one `@`, a dot after it, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Exactly `DDD-DDD-DDDD`.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// `DDDDD` or `DDDDD-DDDD`.
pub fn is_valid_zip(value: &str) -> bool {
    ZIP.is_match(value)
}

/// Any absolute URL when a scheme is given, host or not; otherwise a
/// dotted domain suffix that parses once `http://` is prepended.
pub fn is_valid_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if SCHEME.is_match(value) {
        return Url::parse(value).is_ok();
    }
    DOMAIN_SUFFIX.is_match(value) && Url::parse(&format!("http://{}", value)).is_ok()
}
