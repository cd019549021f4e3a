//! Render snapshot of the wizard.

use serde::Serialize;

use crate::domain::appearance::{Styling, Theme};
use crate::domain::form::{ConditionalFields, FieldKind};
use crate::domain::notification::{Toast, ToastKind, ToastPhase};
use crate::domain::review::ReviewSection;

use super::field_status::FieldStatus;
use super::navigator::Wizard;

/// Which forward button the current step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    Next,
    Submit,
}

/// One field of the active step as the host should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub visible: bool,
    pub value: String,
    pub status: FieldStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

/// Everything a host needs to draw the widget after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub current_step: usize,
    pub step_title: String,
    pub step_titles: Vec<String>,
    pub completed_steps: Vec<usize>,
    pub progress: f64,
    pub show_previous: bool,
    pub primary_action: PrimaryAction,
    pub next_enabled: bool,
    pub submit_enabled: bool,
    pub fields: Vec<FieldView>,
    pub review: Vec<ReviewSection>,
    pub toast: Option<ToastView>,
    pub theme: Theme,
    pub styling: Styling,
    /// Field the host should scroll to and focus, after a failed submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

impl WizardView {
    /// Captures navigation, fields and review from the wizard. Header,
    /// toast, theme and submit state take their defaults until set.
    pub fn capture(wizard: &Wizard) -> Self {
        let definition = wizard.definition();
        let state = wizard.state();
        let step = definition.step(state.current_step());
        let on_review = state.is_terminal();

        let fields = step
            .map(|s| {
                s.fields
                    .iter()
                    .map(|f| FieldView {
                        key: f.key.clone(),
                        label: f.label.clone(),
                        kind: f.kind,
                        required: f.is_required(),
                        visible: ConditionalFields::is_visible(f, wizard.form()),
                        value: wizard.form().text(&f.key).to_string(),
                        status: wizard.status(&f.key).clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: String::new(),
            subtitle: None,
            current_step: state.current_step(),
            step_title: step.map(|s| s.title.clone()).unwrap_or_default(),
            step_titles: definition.steps().iter().map(|s| s.title.clone()).collect(),
            completed_steps: state.completed_steps().iter().copied().collect(),
            progress: state.progress_fraction(),
            show_previous: state.current_step() > 0,
            primary_action: if on_review {
                PrimaryAction::Submit
            } else {
                PrimaryAction::Next
            },
            next_enabled: wizard.can_advance(),
            submit_enabled: on_review,
            fields,
            review: if on_review {
                wizard.review().to_vec()
            } else {
                Vec::new()
            },
            toast: None,
            theme: Theme::default(),
            styling: Styling::default(),
            focus: None,
        }
    }

    pub fn with_header(mut self, title: impl Into<String>, subtitle: Option<String>) -> Self {
        self.title = title.into();
        self.subtitle = subtitle;
        self
    }

    /// Disables submit while an attempt is in flight.
    pub fn with_submit_enabled(mut self, enabled: bool) -> Self {
        self.submit_enabled = self.primary_action == PrimaryAction::Submit && enabled;
        self
    }

    pub fn with_toast(mut self, toast: Option<(&Toast, ToastPhase)>) -> Self {
        self.toast = toast.map(|(t, phase)| ToastView {
            kind: t.kind,
            message: t.message.clone(),
            phase,
        });
        self
    }

    pub fn with_theme(mut self, theme: Theme, styling: Styling) -> Self {
        self.theme = theme;
        self.styling = styling;
        self
    }

    pub fn with_focus(mut self, key: Option<String>) -> Self {
        self.focus = key;
        self
    }

    pub fn field(&self, key: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.key == key)
    }
}
