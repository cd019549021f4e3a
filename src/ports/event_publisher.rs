//! EventPublisher port - Where lifecycle notifications go.
//!
//! The widget announces `form-submit`, `form-success` and `form-error`
//! here without knowing how the host observes them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Delivers notifications in the order they are published.
///
/// An error means some observer did not hear about the event. The widget
/// logs it and carries on; a submission outcome never depends on it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Stops at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
