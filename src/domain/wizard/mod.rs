//! Wizard module - Step navigation gated on per-step validity.
//!
//! - `state` - `WizardState` (current step, completed steps, progress)
//! - `field_status` - Three-state field decoration
//! - `field_event` - Inbound field notifications from the host
//! - `errors` - Step and navigation errors
//! - `navigator` - The `Wizard` aggregate tying form values to navigation
//! - `view` - Render snapshot handed to the host

mod errors;
mod field_event;
mod field_status;
mod navigator;
mod state;
mod view;

pub use errors::{FieldFailure, StepValidationError, WizardError};
pub use field_event::FieldEvent;
pub use field_status::FieldStatus;
pub use navigator::Wizard;
pub use state::WizardState;
pub use view::{FieldView, PrimaryAction, ToastView, WizardView};
