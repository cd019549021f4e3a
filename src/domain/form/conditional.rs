//! Conditional fields - trigger value → dependent visibility.
//!
//! Turning a trigger off hides its dependents and clears their values so
//! hidden data is never submitted. Turning it on reveals them empty.

use super::field::{DependsOn, FieldDefinition, Trigger};
use super::step::FormDefinition;
use super::values::FormState;

/// Visibility change produced by a trigger update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalChange {
    Revealed { key: String },
    Hidden { key: String, cleared: bool },
}

impl ConditionalChange {
    pub fn key(&self) -> &str {
        match self {
            ConditionalChange::Revealed { key } | ConditionalChange::Hidden { key, .. } => key,
        }
    }
}

/// Stateless controller for trigger-driven field groups.
pub struct ConditionalFields;

impl ConditionalFields {
    /// Returns true if the dependency's trigger currently holds its value.
    pub fn is_triggered(dependency: &DependsOn, form: &FormState) -> bool {
        match &dependency.trigger {
            Trigger::Checked => form.is_checked(&dependency.trigger_key),
            Trigger::Equals(value) => form.text(&dependency.trigger_key) == value,
        }
    }

    /// Unconditional fields are always visible.
    pub fn is_visible(field: &FieldDefinition, form: &FormState) -> bool {
        field
            .depends_on
            .as_ref()
            .map_or(true, |dep| Self::is_triggered(dep, form))
    }

    /// Re-evaluates every dependent of `trigger_key` after it changed.
    ///
    /// Hidden dependents have their value cleared.
    pub fn apply(
        definition: &FormDefinition,
        form: &mut FormState,
        trigger_key: &str,
    ) -> Vec<ConditionalChange> {
        let mut changes = Vec::new();
        for dependent in definition.dependents_of(trigger_key) {
            if Self::is_visible(dependent, form) {
                changes.push(ConditionalChange::Revealed {
                    key: dependent.key.clone(),
                });
            } else {
                let cleared = form.clear(&dependent.key);
                changes.push(ConditionalChange::Hidden {
                    key: dependent.key.clone(),
                    cleared,
                });
            }
        }
        changes
    }

    /// Visible fields that must be filled at submission although they carry
    /// no static required flag.
    pub fn required_when_visible<'a>(
        definition: &'a FormDefinition,
        form: &'a FormState,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        definition.fields().filter(move |f| {
            f.depends_on
                .as_ref()
                .is_some_and(|d| d.required_when_visible && Self::is_triggered(d, form))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{keys, FieldValue};

    fn setup() -> (FormDefinition, FormState) {
        let def = FormDefinition::inquiry();
        let form = FormState::initial(&def);
        (def, form)
    }

    #[test]
    fn dependents_start_hidden() {
        let (def, form) = setup();
        let ext = def.field(keys::PHONE_EXT).unwrap();
        let website = def.field(keys::WEBSITE_ADDRESS).unwrap();

        assert!(!ConditionalFields::is_visible(ext, &form));
        assert!(!ConditionalFields::is_visible(website, &form));
        assert!(ConditionalFields::is_visible(def.field(keys::PHONE).unwrap(), &form));
    }

    #[test]
    fn checking_trigger_reveals_without_prefill() {
        let (def, mut form) = setup();
        form.set(keys::PHONE_EXT_CHECK, FieldValue::Flag(true));

        let changes = ConditionalFields::apply(&def, &mut form, keys::PHONE_EXT_CHECK);

        assert_eq!(
            changes,
            vec![ConditionalChange::Revealed {
                key: keys::PHONE_EXT.to_string()
            }]
        );
        assert_eq!(form.text(keys::PHONE_EXT), "");
    }

    #[test]
    fn unchecking_trigger_clears_dependent_value() {
        let (def, mut form) = setup();
        form.set(keys::BUSINESS_PHONE_EXT_CHECK, FieldValue::Flag(true));
        form.set(keys::BUSINESS_PHONE_EXT, FieldValue::Text("204".into()));

        form.set(keys::BUSINESS_PHONE_EXT_CHECK, FieldValue::Flag(false));
        let changes = ConditionalFields::apply(&def, &mut form, keys::BUSINESS_PHONE_EXT_CHECK);

        assert_eq!(
            changes,
            vec![ConditionalChange::Hidden {
                key: keys::BUSINESS_PHONE_EXT.to_string(),
                cleared: true
            }]
        );
        assert_eq!(form.text(keys::BUSINESS_PHONE_EXT), "");
    }

    #[test]
    fn website_group_follows_radio_value() {
        let (def, mut form) = setup();
        form.set(keys::HAS_WEBSITE, FieldValue::Text("yes".into()));
        ConditionalFields::apply(&def, &mut form, keys::HAS_WEBSITE);
        form.set(keys::WEBSITE_ADDRESS, FieldValue::Text("example.com".into()));

        let required: Vec<_> = ConditionalFields::required_when_visible(&def, &form)
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(required, vec![keys::WEBSITE_ADDRESS]);

        form.set(keys::HAS_WEBSITE, FieldValue::Text("no".into()));
        let changes = ConditionalFields::apply(&def, &mut form, keys::HAS_WEBSITE);

        assert_eq!(changes[0].key(), keys::WEBSITE_ADDRESS);
        assert_eq!(form.text(keys::WEBSITE_ADDRESS), "");
        assert_eq!(ConditionalFields::required_when_visible(&def, &form).count(), 0);
    }

    #[test]
    fn apply_on_non_trigger_changes_nothing() {
        let (def, mut form) = setup();
        assert!(ConditionalFields::apply(&def, &mut form, keys::FIRST_NAME).is_empty());
    }
}
