//! Application layer - The mounted widget and its command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `InquiryWidget` is the single entry point a host talks to.

pub mod handlers;
mod widget;

pub use handlers::{SubmissionError, SubmitInquiryHandler};
pub use widget::{resolve_theme, InquiryWidget, WidgetPorts, MASK_LOAD_TIMEOUT};
