//! Domain layer containing the wizard's rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, events, state machines)
//! - `form` - Field and step definitions, form values, validation, conditional fields
//! - `wizard` - Step navigation, field decorations and the render snapshot
//! - `review` - Read-only summary of entered values
//! - `submission` - Payload, pre-submit validation, lifecycle events, failure text
//! - `notification` - Toast display lifecycle
//! - `appearance` - Theme selection and cosmetic options
//!
//! Everything here is synchronous and free of I/O.

pub mod appearance;
pub mod form;
pub mod foundation;
pub mod notification;
pub mod review;
pub mod submission;
pub mod wizard;
