//! Notification module - Transient toast messages.
//!
//! - `toast` - Toast content, display phases and the single display slot

mod toast;

pub use toast::{Toast, ToastKind, ToastPhase, ToastSlot, ToastTiming};
