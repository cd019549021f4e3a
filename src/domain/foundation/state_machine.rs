//! Validated transitions for small phase enums.
//!
//! `ToastPhase` and `SubmissionPhase` implement this; an illegal move is
//! reported as `ErrorCode::InvalidStateTransition` instead of silently
//! corrupting the phase.

use super::{DomainError, ErrorCode};

/// A phase enum with a fixed transition table.
///
/// ```ignore
/// let phase = SubmissionPhase::Idle.transition_to(SubmissionPhase::InFlight)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Targets reachable in one move. Must agree with `can_transition_to`.
    fn valid_transitions(&self) -> Vec<Self>;

    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if !self.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{:?} cannot move to {:?}", self, target),
            )
            .with_detail("from", format!("{:?}", self))
            .with_detail("to", format!("{:?}", target)));
        }
        Ok(target)
    }

    /// No outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
