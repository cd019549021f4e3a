//! The `Wizard` aggregate: form values, navigation and field decorations.
//!
//! All mutation happens through field events and navigation calls, from a
//! single event-handling context.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::form::{
    messages, validate, ConditionalChange, ConditionalFields, FieldDefinition, FieldKind,
    FieldValue, FormDefinition, FormState,
};
use crate::domain::review::{build_review, ReviewSection};

use super::errors::{FieldFailure, StepValidationError, WizardError};
use super::field_event::FieldEvent;
use super::field_status::FieldStatus;
use super::state::WizardState;

static UNTOUCHED: FieldStatus = FieldStatus::Untouched;

/// One mounted wizard over a form definition.
#[derive(Debug, Clone)]
pub struct Wizard {
    definition: Arc<FormDefinition>,
    form: FormState,
    state: WizardState,
    statuses: BTreeMap<String, FieldStatus>,
    review: Vec<ReviewSection>,
}

impl Wizard {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        let form = FormState::initial(&definition);
        let state = WizardState::new(definition.total_steps());
        Self {
            definition,
            form,
            state,
            statuses: BTreeMap::new(),
            review: Vec::new(),
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The review built when the review step was last entered.
    pub fn review(&self) -> &[ReviewSection] {
        &self.review
    }

    pub fn status(&self, key: &str) -> &FieldStatus {
        self.statuses.get(key).unwrap_or(&UNTOUCHED)
    }

    /// Decorations that are not `Untouched`.
    pub fn statuses(&self) -> &BTreeMap<String, FieldStatus> {
        &self.statuses
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.definition
            .field(key)
            .is_some_and(|f| ConditionalFields::is_visible(f, &self.form))
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    // === Field events ===

    /// Applies one field event and returns any visibility changes it caused.
    ///
    /// Input re-validates a field only while it is already invalid; blur
    /// always validates. Toggles and selections re-evaluate dependents.
    ///
    /// # Errors
    ///
    /// Unknown keys, undeclared radio options, events that do not fit the
    /// field kind and values for a hidden dependent are rejected without
    /// changing anything.
    pub fn handle_field_event(
        &mut self,
        event: FieldEvent,
    ) -> Result<Vec<ConditionalChange>, WizardError> {
        let field = self
            .definition
            .field(event.key())
            .ok_or_else(|| WizardError::UnknownField(event.key().to_string()))?
            .clone();

        let changes = match event {
            FieldEvent::Input { key, value } => {
                if field.is_radio() || field.is_checkbox() {
                    return Err(kind_mismatch(&field, "input"));
                }
                self.ensure_visible(&key)?;
                self.form.set(&key, FieldValue::Text(value));
                if self.status(&key).is_invalid() {
                    self.decorate(&field);
                }
                self.apply_conditionals(&key)
            }
            FieldEvent::Toggle { key, checked } => {
                if !field.is_checkbox() {
                    return Err(kind_mismatch(&field, "toggle"));
                }
                self.form.set(&key, FieldValue::Flag(checked));
                self.apply_conditionals(&key)
            }
            FieldEvent::Select { key, value } => {
                if !field.is_radio() {
                    return Err(kind_mismatch(&field, "select"));
                }
                if !field.has_option(&value) {
                    return Err(WizardError::UnknownOption { key, value });
                }
                self.ensure_visible(&key)?;
                self.form.set(&key, FieldValue::Text(value));
                if self.status(&key).is_invalid() {
                    self.decorate(&field);
                }
                self.apply_conditionals(&key)
            }
            FieldEvent::Blur { key } => {
                if !field.is_checkbox() && self.is_visible(&key) {
                    self.decorate(&field);
                }
                Vec::new()
            }
        };

        Ok(changes)
    }

    fn ensure_visible(&self, key: &str) -> Result<(), WizardError> {
        if self.is_visible(key) {
            Ok(())
        } else {
            Err(WizardError::HiddenField(key.to_string()))
        }
    }

    fn decorate(&mut self, field: &FieldDefinition) {
        let result = validate(field, self.form.text(&field.key));
        let status = match result.message {
            Some(message) => FieldStatus::Invalid(message),
            None => FieldStatus::Valid,
        };
        self.statuses.insert(field.key.clone(), status);
    }

    fn apply_conditionals(&mut self, trigger_key: &str) -> Vec<ConditionalChange> {
        let changes = ConditionalFields::apply(&self.definition, &mut self.form, trigger_key);
        for change in &changes {
            if let ConditionalChange::Hidden { key, .. } = change {
                self.statuses.remove(key);
            }
        }
        changes
    }

    // === Navigation ===

    /// Gate failures for a step: visible required fields that are blank and
    /// required radio groups with no member selected.
    pub fn step_failures(&self, step: usize) -> Vec<FieldFailure> {
        let Some(step) = self.definition.step(step) else {
            return Vec::new();
        };
        step.fields
            .iter()
            .filter(|f| f.is_required() && ConditionalFields::is_visible(f, &self.form))
            .filter_map(|f| {
                let value = self.form.text(&f.key);
                let message = if f.kind == FieldKind::Radio {
                    (!f.has_option(value)).then_some(messages::SELECT_OPTION)
                } else {
                    value.trim().is_empty().then_some(messages::REQUIRED)
                };
                message.map(|m| FieldFailure::new(&f.key, &f.label, m))
            })
            .collect()
    }

    /// Whether "Next" is enabled for the current step.
    pub fn can_advance(&self) -> bool {
        !self.state.is_terminal() && self.step_failures(self.state.current_step()).is_empty()
    }

    /// Advances one step if the current step passes its gate.
    ///
    /// Returns the new current step. On the review step this is a no-op.
    /// Entering the review step rebuilds the review.
    ///
    /// # Errors
    ///
    /// `StepValidationError` listing every failing field; each one is
    /// decorated invalid and the wizard does not move.
    pub fn go_next(&mut self) -> Result<usize, StepValidationError> {
        let step = self.state.current_step();
        if self.state.is_terminal() {
            return Ok(step);
        }

        let failures = self.step_failures(step);
        if !failures.is_empty() {
            self.mark_failures(&failures);
            return Err(StepValidationError { step, failures });
        }

        self.state.advance();
        if self.state.is_terminal() {
            self.rebuild_review();
        }
        Ok(self.state.current_step())
    }

    /// Moves back one step without validation. Returns false at step 0.
    pub fn go_previous(&mut self) -> bool {
        self.state.retreat()
    }

    /// Jumps to an editable step (the review's "edit" links).
    pub fn jump_to(&mut self, step: usize) -> Result<(), WizardError> {
        self.state.jump_to(step)
    }

    pub fn rebuild_review(&mut self) {
        self.review = build_review(&self.definition, &self.form);
    }

    // === Decorations and reset ===

    /// Decorates each failing field invalid with its message.
    pub fn mark_failures(&mut self, failures: &[FieldFailure]) {
        for failure in failures {
            self.statuses
                .insert(failure.key.clone(), FieldStatus::Invalid(failure.message.clone()));
        }
    }

    pub fn clear_decorations(&mut self) {
        self.statuses.clear();
    }

    /// Restores initial values, step 0, no completion marks, no decorations.
    pub fn reset(&mut self) {
        self.form.reset(&self.definition);
        self.state.reset();
        self.statuses.clear();
        self.review.clear();
    }
}

fn kind_mismatch(field: &FieldDefinition, event: &'static str) -> WizardError {
    WizardError::KindMismatch {
        key: field.key.clone(),
        kind: field.kind,
        event,
    }
}
