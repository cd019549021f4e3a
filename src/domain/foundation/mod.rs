//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, event plumbing and error types
//! that form the vocabulary of the inquiry wizard domain.

mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::WidgetId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
