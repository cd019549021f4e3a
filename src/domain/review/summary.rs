//! Review summary built from the current form state.
//!
//! One section per input step, in step order. Checkboxes are omitted;
//! their effect is visible through the dependent fields they reveal.

use serde::Serialize;

use crate::domain::form::{FieldDefinition, FormDefinition, FormState};

/// Display text for a field with no value.
pub const NOT_PROVIDED: &str = "Not provided";

/// One labelled value in the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub key: String,
    pub label: String,
    /// The entered value, or `NOT_PROVIDED`.
    pub display_value: String,
    /// Set when `display_value` is the placeholder, so renderers can
    /// style it without comparing strings.
    pub is_empty: bool,
    pub required: bool,
}

impl ReviewItem {
    /// The entered value, `None` when nothing was provided.
    pub fn value(&self) -> Option<&str> {
        (!self.is_empty).then_some(self.display_value.as_str())
    }
}

/// The items of one input step, with the step index used by "edit" links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub step_index: usize,
    pub title: String,
    pub items: Vec<ReviewItem>,
}

impl ReviewSection {
    pub fn item(&self, key: &str) -> Option<&ReviewItem> {
        self.items.iter().find(|i| i.key == key)
    }
}

/// Builds the review from the current form state.
pub fn build_review(definition: &FormDefinition, form: &FormState) -> Vec<ReviewSection> {
    definition
        .input_steps()
        .iter()
        .map(|step| ReviewSection {
            step_index: step.index,
            title: step.title.clone(),
            items: step
                .fields
                .iter()
                .filter(|f| !f.is_checkbox())
                .map(|f| review_item(f, form))
                .collect(),
        })
        .collect()
}

fn review_item(field: &FieldDefinition, form: &FormState) -> ReviewItem {
    let value = resolve_value(field, form);
    ReviewItem {
        key: field.key.clone(),
        label: field.label.clone(),
        is_empty: value.is_none(),
        display_value: value.unwrap_or(NOT_PROVIDED).to_string(),
        required: field.is_required(),
    }
}

/// Radio groups resolve to the selected member's value; anything that is
/// not a declared option counts as no selection. Text is shown exactly as
/// it will be submitted; whitespace-only counts as empty.
fn resolve_value<'a>(field: &FieldDefinition, form: &'a FormState) -> Option<&'a str> {
    let raw = form.text(&field.key);
    if field.is_radio() {
        return field.has_option(raw).then_some(raw);
    }
    (!raw.trim().is_empty()).then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{keys, FieldValue};

    fn filled() -> (FormDefinition, FormState) {
        let def = FormDefinition::inquiry();
        let mut form = FormState::initial(&def);
        form.set(keys::FIRST_NAME, FieldValue::Text("Ada".into()));
        form.set(keys::PREFERRED_CONTACT, FieldValue::Text("email".into()));
        (def, form)
    }

    #[test]
    fn one_section_per_input_step() {
        let (def, form) = filled();
        let review = build_review(&def, &form);

        let titles: Vec<_> = review.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Personal Information",
                "Business Information",
                "Billing Address",
                "Service Details"
            ]
        );
        assert_eq!(review[2].step_index, 2);
    }

    #[test]
    fn checkboxes_are_not_listed() {
        let (def, form) = filled();
        let review = build_review(&def, &form);
        assert!(review[0].item(keys::PHONE_EXT_CHECK).is_none());
        assert!(review[0].item(keys::PHONE_EXT).is_some());
    }

    #[test]
    fn empty_values_use_placeholder_and_flag() {
        let (def, form) = filled();
        let review = build_review(&def, &form);

        let last_name = review[0].item(keys::LAST_NAME).unwrap();
        assert!(last_name.is_empty);
        assert_eq!(last_name.display_value, NOT_PROVIDED);
        assert_eq!(last_name.value(), None);
        assert!(last_name.required);

        let first_name = review[0].item(keys::FIRST_NAME).unwrap();
        assert!(!first_name.is_empty);
        assert_eq!(first_name.value(), Some("Ada"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let (def, mut form) = filled();
        form.set(keys::BILLING_CITY, FieldValue::Text("   ".into()));
        let review = build_review(&def, &form);
        assert!(review[2].item(keys::BILLING_CITY).unwrap().is_empty);
    }

    #[test]
    fn surrounding_whitespace_is_kept() {
        let (def, mut form) = filled();
        form.set(keys::FIRST_NAME, FieldValue::Text(" Ada ".into()));
        let review = build_review(&def, &form);
        assert_eq!(review[0].item(keys::FIRST_NAME).unwrap().value(), Some(" Ada "));
    }

    #[test]
    fn radio_resolves_to_selected_member() {
        let (def, mut form) = filled();
        form.set(keys::SERVICE_DESIRED, FieldValue::Text("Carpentry".into()));
        let review = build_review(&def, &form);
        let service = &review[3];

        assert_eq!(service.item(keys::PREFERRED_CONTACT).unwrap().value(), Some("email"));
        assert!(service.item(keys::SERVICE_DESIRED).unwrap().is_empty);
        assert!(service.item(keys::HAS_WEBSITE).unwrap().is_empty);
    }

    #[test]
    fn default_country_is_shown() {
        let (def, form) = filled();
        let review = build_review(&def, &form);
        assert_eq!(review[2].item(keys::BILLING_COUNTRY).unwrap().value(), Some("USA"));
    }
}
