//! EventSubscriber port - Host-side observation of lifecycle notifications.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Host callback for one or more notification types.
///
/// ```ignore
/// struct LeadCounter(AtomicUsize);
///
/// #[async_trait]
/// impl EventHandler for LeadCounter {
///     async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
///         self.0.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "LeadCounter"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Shown in publish errors and logs.
    fn name(&self) -> &'static str;
}

/// Registers handlers by event type, e.g. `"form-success"`.
pub trait EventSubscriber: Send + Sync {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}
