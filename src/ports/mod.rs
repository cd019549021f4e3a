//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the wizard and its host. Adapters implement these ports.
//!
//! ## Submission
//!
//! - `SubmissionTransport` - Delivers the payload, classifies failures
//!
//! ## Events
//!
//! - `EventPublisher` - Emits lifecycle notifications
//! - `EventSubscriber` / `EventHandler` - Host-side observation
//!
//! ## Host capabilities
//!
//! - `ThemeResolver` - Ambient dark-mode preference
//! - `PhoneMaskLoader` / `PhoneMask` - Optional phone input formatting
//! - `ViewRenderer` - Receives render snapshots

mod event_publisher;
mod event_subscriber;
mod phone_mask;
mod submission_transport;
mod theme_resolver;
mod view_renderer;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use phone_mask::{MaskLoadError, PhoneMask, PhoneMaskLoader};
pub use submission_transport::{Ack, SubmissionTransport, TransportError};
pub use theme_resolver::ThemeResolver;
pub use view_renderer::ViewRenderer;
