//! Toast lifecycle.
//!
//! A toast enters, becomes visible shortly after, stays for the display
//! duration measured from when it was shown, fades, and is removed. Only
//! one toast exists at a time; showing another replaces it at once.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::domain::foundation::{DomainError, StateMachine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Display phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    Entering,
    Visible,
    Fading,
    Removed,
}

impl ToastPhase {
    fn successor(self) -> Option<Self> {
        self.valid_transitions().first().copied()
    }
}

impl StateMachine for ToastPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ToastPhase::*;
        matches!(
            (self, target),
            (Entering, Visible) | (Visible, Fading) | (Fading, Removed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ToastPhase::*;
        match self {
            Entering => vec![Visible],
            Visible => vec![Fading],
            Fading => vec![Removed],
            Removed => vec![],
        }
    }
}

/// Phase boundaries, all measured from the moment the toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub enter_delay: Duration,
    pub display: Duration,
    pub fade: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(50),
            display: Duration::from_secs(5),
            fade: Duration::from_millis(300),
        }
    }
}

impl ToastTiming {
    /// The phase a toast shown `elapsed` ago should be in.
    pub fn phase_at(&self, elapsed: Duration) -> ToastPhase {
        if elapsed >= self.display + self.fade {
            ToastPhase::Removed
        } else if elapsed >= self.display {
            ToastPhase::Fading
        } else if elapsed >= self.enter_delay {
            ToastPhase::Visible
        } else {
            ToastPhase::Entering
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    shown_at: Instant,
    phase: ToastPhase,
}

/// Holds the toast currently on screen, if any.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    timing: ToastTiming,
    active: Option<ActiveToast>,
}

impl ToastSlot {
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            timing,
            active: None,
        }
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// Shows `toast`, discarding whatever was displayed before.
    pub fn show(&mut self, toast: Toast, now: Instant) {
        self.active = Some(ActiveToast {
            toast,
            shown_at: now,
            phase: ToastPhase::Entering,
        });
    }

    pub fn current(&self) -> Option<(&Toast, ToastPhase)> {
        self.active.as_ref().map(|a| (&a.toast, a.phase))
    }

    /// Steps the active toast through every phase it has reached by `now`.
    ///
    /// Returns the phase after the update, or `None` once the slot is empty.
    /// A removed toast is dropped from the slot.
    pub fn tick(&mut self, now: Instant) -> Result<Option<ToastPhase>, DomainError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };

        let target = self
            .timing
            .phase_at(now.saturating_duration_since(active.shown_at));
        while active.phase != target {
            let Some(next) = active.phase.successor() else {
                break;
            };
            active.phase = active.phase.transition_to(next)?;
        }

        if active.phase == ToastPhase::Removed {
            self.active = None;
            return Ok(None);
        }
        Ok(Some(active.phase))
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }
}
