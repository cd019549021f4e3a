//! Whole-form validation run before any transport call.

use thiserror::Error;

use crate::domain::form::{validate, validate_as_required, ConditionalFields, FormDefinition, FormState};
use crate::domain::wizard::FieldFailure;

/// Every field that blocks submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) need attention before submitting", .failures.len())]
pub struct SubmissionValidationError {
    pub failures: Vec<FieldFailure>,
}

impl SubmissionValidationError {
    /// The field the host should scroll to and focus.
    pub fn first_key(&self) -> Option<&str> {
        self.failures.first().map(|f| f.key.as_str())
    }

    /// Step containing the first failing field.
    pub fn first_step(&self, definition: &FormDefinition) -> Option<usize> {
        self.first_key().and_then(|k| definition.step_of(k))
    }
}

/// Re-checks the whole form across every step.
///
/// Visible required fields and required radio groups get the full rule
/// set, so shape errors block submission too. A visible dependent marked
/// required-when-visible is checked as if it were required.
///
/// # Errors
///
/// `SubmissionValidationError` listing every failing field.
pub fn validate_for_submission(
    definition: &FormDefinition,
    form: &FormState,
) -> Result<(), SubmissionValidationError> {
    let failures: Vec<FieldFailure> = definition
        .fields()
        .filter(|f| ConditionalFields::is_visible(f, form))
        .filter_map(|f| {
            let value = form.text(&f.key);
            let result = if f.is_required() {
                validate(f, value)
            } else if f
                .depends_on
                .as_ref()
                .is_some_and(|d| d.required_when_visible)
            {
                validate_as_required(f, value)
            } else {
                return None;
            };
            result
                .message
                .map(|m| FieldFailure::new(&f.key, &f.label, m))
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(SubmissionValidationError { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{keys, messages, FieldValue};

    fn complete_form(def: &FormDefinition) -> FormState {
        let mut form = FormState::initial(def);
        for (key, value) in [
            (keys::FIRST_NAME, "Ada"),
            (keys::LAST_NAME, "Lovelace"),
            (keys::EMAIL, "ada@example.com"),
            (keys::PHONE, "555-123-4567"),
            (keys::BILLING_STREET, "1 Main St"),
            (keys::BILLING_CITY, "Springfield"),
            (keys::BILLING_STATE, "IL"),
            (keys::BILLING_ZIP_CODE, "62701"),
            (keys::PREFERRED_CONTACT, "email"),
            (keys::SERVICE_DESIRED, "Web Development"),
        ] {
            form.set(key, FieldValue::Text(value.into()));
        }
        form
    }

    #[test]
    fn complete_form_passes() {
        let def = FormDefinition::inquiry();
        assert_eq!(validate_for_submission(&def, &complete_form(&def)), Ok(()));
    }

    #[test]
    fn reports_failures_across_all_steps() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::LAST_NAME, FieldValue::Text(String::new()));
        form.set(keys::BILLING_ZIP_CODE, FieldValue::Text("1234".into()));
        form.set(keys::SERVICE_DESIRED, FieldValue::Text(String::new()));

        let err = validate_for_submission(&def, &form).unwrap_err();

        let pairs: Vec<_> = err
            .failures
            .iter()
            .map(|f| (f.key.as_str(), f.message.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (keys::LAST_NAME, messages::REQUIRED),
                (keys::BILLING_ZIP_CODE, messages::INVALID_ZIP),
                (keys::SERVICE_DESIRED, messages::SELECT_OPTION),
            ]
        );
        assert_eq!(err.first_key(), Some(keys::LAST_NAME));
        assert_eq!(err.first_step(&def), Some(0));
    }

    #[test]
    fn required_phone_shape_is_enforced() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::PHONE, FieldValue::Text("5551234567".into()));

        let err = validate_for_submission(&def, &form).unwrap_err();
        assert_eq!(err.failures[0].message, messages::INVALID_PHONE);
    }

    #[test]
    fn website_yes_with_empty_address_blocks_submission() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::HAS_WEBSITE, FieldValue::Text("yes".into()));

        let err = validate_for_submission(&def, &form).unwrap_err();

        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].key, keys::WEBSITE_ADDRESS);
        assert_eq!(err.failures[0].message, messages::REQUIRED);
        assert_eq!(err.first_step(&def), Some(3));
    }

    #[test]
    fn website_address_shape_checked_when_visible() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::HAS_WEBSITE, FieldValue::Text("yes".into()));
        form.set(keys::WEBSITE_ADDRESS, FieldValue::Text("not a site".into()));

        let err = validate_for_submission(&def, &form).unwrap_err();
        assert_eq!(err.failures[0].message, messages::INVALID_URL);

        form.set(keys::WEBSITE_ADDRESS, FieldValue::Text("example.com".into()));
        assert!(validate_for_submission(&def, &form).is_ok());
    }

    #[test]
    fn website_no_needs_no_address() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::HAS_WEBSITE, FieldValue::Text("no".into()));
        assert!(validate_for_submission(&def, &form).is_ok());
    }

    #[test]
    fn optional_shape_errors_do_not_block() {
        let def = FormDefinition::inquiry();
        let mut form = complete_form(&def);
        form.set(keys::TEXT_NUMBER, FieldValue::Text("12".into()));
        assert!(validate_for_submission(&def, &form).is_ok());
    }
}
