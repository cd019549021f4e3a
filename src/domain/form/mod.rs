//! Form module - Static field/step definitions and per-field rules.
//!
//! - `field` - Field definitions, kinds and conditional dependencies
//! - `step` - Step definitions and the validated `FormDefinition`
//! - `catalog` - The standard inquiry form (4- and 5-step variants)
//! - `values` - Mutable `FormState` keyed by field
//! - `validator` - Pure per-field validation rules
//! - `conditional` - Trigger-driven visibility of dependent fields

mod catalog;
mod conditional;
mod field;
mod step;
mod validator;
mod values;

pub use catalog::{keys, DEFAULT_COUNTRY};
pub use conditional::{ConditionalChange, ConditionalFields};
pub use field::{DependsOn, FieldDefinition, FieldKind, RadioOption, Trigger};
pub use step::{DefinitionError, FormDefinition, StepDefinition};
pub use validator::{
    is_valid_email, is_valid_phone, is_valid_url, is_valid_zip, messages, validate,
    validate_as_required, ValidationResult,
};
pub use values::{FieldValue, FormState};
