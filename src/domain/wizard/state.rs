//! WizardState - current step index and completion marks.

use serde::Serialize;
use std::collections::BTreeSet;

use super::errors::WizardError;

/// Position of the wizard within a fixed sequence of `total_steps` steps.
///
/// `current_step` is always in `0..total_steps`. The last index is the
/// review step and is entered only by advancing from the step before it.
/// Completion marks are never removed by moving backwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_step: usize,
    completed_steps: BTreeSet<usize>,
    total_steps: usize,
}

impl WizardState {
    /// Starts at step 0. `total_steps` is clamped to at least 2.
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 0,
            completed_steps: BTreeSet::new(),
            total_steps: total_steps.max(2),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn terminal_index(&self) -> usize {
        self.total_steps - 1
    }

    pub fn is_terminal(&self) -> bool {
        self.current_step == self.terminal_index()
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Marks the current step completed and moves forward one step.
    ///
    /// Returns false, changing nothing, when already on the review step.
    /// Callers gate this on the step's validity.
    pub fn advance(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.completed_steps.insert(self.current_step);
        self.current_step += 1;
        true
    }

    /// Moves back one step. Returns false at step 0.
    pub fn retreat(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    /// Jumps to an editable step without touching completion marks.
    ///
    /// # Errors
    ///
    /// `StepOutOfRange` for the review step or anything past it.
    pub fn jump_to(&mut self, step: usize) -> Result<(), WizardError> {
        let last = self.terminal_index() - 1;
        if step > last {
            return Err(WizardError::StepOutOfRange { index: step, last });
        }
        self.current_step = step;
        Ok(())
    }

    /// `current_step / (total_steps - 1)`: 0.0 on the first step, 1.0 on review.
    pub fn progress_fraction(&self) -> f64 {
        self.current_step as f64 / self.terminal_index() as f64
    }

    pub fn reset(&mut self) {
        self.current_step = 0;
        self.completed_steps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero_with_nothing_completed() {
        let state = WizardState::new(5);
        assert_eq!(state.current_step(), 0);
        assert!(state.completed_steps().is_empty());
        assert_eq!(state.progress_fraction(), 0.0);
    }

    #[test]
    fn advance_marks_prior_step_completed() {
        let mut state = WizardState::new(5);
        assert!(state.advance());
        assert_eq!(state.current_step(), 1);
        assert!(state.is_completed(0));
    }

    #[test]
    fn advance_is_noop_on_review() {
        let mut state = WizardState::new(4);
        while state.advance() {}
        assert!(state.is_terminal());
        assert_eq!(state.progress_fraction(), 1.0);

        let before = state.clone();
        assert!(!state.advance());
        assert_eq!(state, before);
    }

    #[test]
    fn retreat_keeps_completion_marks() {
        let mut state = WizardState::new(5);
        state.advance();
        state.advance();
        assert!(state.retreat());
        assert_eq!(state.current_step(), 1);
        assert!(state.is_completed(1));
    }

    #[test]
    fn retreat_floors_at_zero() {
        let mut state = WizardState::new(5);
        assert!(!state.retreat());
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn jump_to_editable_step_leaves_marks() {
        let mut state = WizardState::new(5);
        for _ in 0..4 {
            state.advance();
        }
        state.jump_to(1).unwrap();
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.completed_steps().len(), 4);
    }

    #[test]
    fn jump_to_review_is_rejected() {
        let mut state = WizardState::new(5);
        assert_eq!(
            state.jump_to(4),
            Err(WizardError::StepOutOfRange { index: 4, last: 3 })
        );
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut state = WizardState::new(5);
        state.advance();
        state.advance();
        state.reset();
        assert_eq!(state, WizardState::new(5));
    }

    proptest! {
        #[test]
        fn progress_is_monotonic_under_advance(total in 2usize..10, steps in 0usize..20) {
            let mut state = WizardState::new(total);
            let mut last = state.progress_fraction();
            for _ in 0..steps {
                state.advance();
                let now = state.progress_fraction();
                prop_assert!(now >= last);
                prop_assert!((0.0..=1.0).contains(&now));
                last = now;
            }
        }

        #[test]
        fn retreat_never_goes_below_zero(total in 2usize..10, moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut state = WizardState::new(total);
            for forward in moves {
                if forward { state.advance(); } else { state.retreat(); }
                prop_assert!(state.current_step() < total);
            }
            for _ in 0..total + 1 {
                state.retreat();
            }
            prop_assert_eq!(state.current_step(), 0);
        }
    }
}
