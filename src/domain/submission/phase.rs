//! Submit affordance guard.

use serde::Serialize;

use crate::domain::foundation::StateMachine;

/// Whether a submit attempt is outstanding. Submit is disabled while
/// `InFlight` and re-enabled when the attempt resolves either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionPhase {
    pub fn is_in_flight(&self) -> bool {
        *self == SubmissionPhase::InFlight
    }
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!((self, target), (Idle, InFlight) | (InFlight, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![InFlight],
            InFlight => vec![Idle],
        }
    }
}
