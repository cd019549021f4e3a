//! Step definitions and the validated, ordered step sequence.

use std::collections::HashSet;
use thiserror::Error;

use super::field::FieldDefinition;

/// One page of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    /// 0-based, dense, unique. Assigned by `FormDefinition::new`.
    pub index: usize,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
}

impl StepDefinition {
    pub fn new(title: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            index: 0,
            title: title.into(),
            fields,
        }
    }

    /// The input-free terminal step.
    pub fn review(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }
}

/// Errors detected while assembling a form definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("A form needs at least one input step and a review step")]
    TooFewSteps,

    #[error("Field key '{0}' is declared more than once")]
    DuplicateKey(String),

    #[error("Field '{field}' depends on unknown trigger '{trigger}'")]
    UnknownTrigger { field: String, trigger: String },

    #[error("Review step '{0}' must not declare fields")]
    ReviewStepHasFields(String),

    #[error("Radio group '{0}' declares no options")]
    RadioWithoutOptions(String),
}

/// The fixed, ordered sequence of steps for one configuration.
///
/// The last step is always the review step; it is reachable only by
/// advancing from the step before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    steps: Vec<StepDefinition>,
}

impl FormDefinition {
    /// Validates and indexes a step sequence.
    ///
    /// # Errors
    ///
    /// Returns `DefinitionError` if there are fewer than two steps, a key
    /// repeats, a dependency names an unknown trigger, the review step has
    /// fields, or a radio group has no options.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, DefinitionError> {
        if steps.len() < 2 {
            return Err(DefinitionError::TooFewSteps);
        }

        if let Some(review) = steps.last() {
            if !review.fields.is_empty() {
                return Err(DefinitionError::ReviewStepHasFields(review.title.clone()));
            }
        }

        let mut keys = HashSet::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            if !keys.insert(field.key.as_str()) {
                return Err(DefinitionError::DuplicateKey(field.key.clone()));
            }
            if field.is_radio() && field.options.is_empty() {
                return Err(DefinitionError::RadioWithoutOptions(field.key.clone()));
            }
        }

        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            if let Some(dep) = &field.depends_on {
                if !keys.contains(dep.trigger_key.as_str()) {
                    return Err(DefinitionError::UnknownTrigger {
                        field: field.key.clone(),
                        trigger: dep.trigger_key.clone(),
                    });
                }
            }
        }

        Ok(Self::assemble(steps))
    }

    /// Re-indexes steps densely without validation.
    pub(crate) fn assemble(mut steps: Vec<StepDefinition>) -> Self {
        for (index, step) in steps.iter_mut().enumerate() {
            step.index = index;
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Total step count N, review step included.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Index of the review step (N-1).
    pub fn terminal_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        index == self.terminal_index()
    }

    /// Steps that collect input (everything before the review step).
    pub fn input_steps(&self) -> &[StepDefinition] {
        &self.steps[..self.terminal_index()]
    }

    /// All fields across all steps, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields().find(|f| f.key == key)
    }

    /// Index of the step declaring `key`.
    pub fn step_of(&self, key: &str) -> Option<usize> {
        self.steps
            .iter()
            .find(|s| s.fields.iter().any(|f| f.key == key))
            .map(|s| s.index)
    }

    /// Fields whose visibility depends on `trigger_key`.
    pub fn dependents_of<'a>(
        &'a self,
        trigger_key: &'a str,
    ) -> impl Iterator<Item = &'a FieldDefinition> + 'a {
        self.fields().filter(move |f| {
            f.depends_on
                .as_ref()
                .is_some_and(|d| d.trigger_key == trigger_key)
        })
    }
}
