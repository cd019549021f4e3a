//! Submission module - Everything about a submit attempt that is not I/O.
//!
//! - `payload` - The JSON body sent to the endpoint
//! - `validation` - Whole-form check run before any transport call
//! - `phase` - Idle / in-flight guard for the submit affordance
//! - `feedback` - Failure classification and user-facing messages
//! - `events` - `form-submit`, `form-success` and `form-error` notifications

mod events;
mod feedback;
mod payload;
mod phase;
mod validation;

pub use events::{FormFailed, FormSubmitted, FormSucceeded, AGGREGATE_TYPE};
pub use feedback::{messages, FailureKind};
pub use payload::{BillingAddress, SubmissionPayload};
pub use phase::SubmissionPhase;
pub use validation::{validate_for_submission, SubmissionValidationError};
