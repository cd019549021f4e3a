//! In-memory event bus.
//!
//! Delivers lifecycle notifications synchronously to handlers registered
//! by the host, and keeps every published envelope for inspection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// - Delivery in publish order, handlers in subscription order
/// - Every handler runs even if an earlier one fails
/// - Published envelopes are retained for assertions
///
/// # Panics
///
/// Methods panic if an internal lock is poisoned.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe("form-success", Arc::new(TracingEventHandler));
///
/// widget.submit().await;
/// assert!(bus.has_event("form-submit"));
/// ```
pub struct InMemoryEventBus {
    state: RwLock<BusState>,
}

#[derive(Default)]
struct BusState {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
    published: Vec<EventEnvelope>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BusState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BusState> {
        self.state.read().expect("InMemoryEventBus: lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, BusState> {
        self.state.write().expect("InMemoryEventBus: lock poisoned")
    }

    /// All published envelopes, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.read().published.clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.read()
            .published
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Event types in publish order, e.g. `["form-submit", "form-error"]`.
    pub fn event_types(&self) -> Vec<String> {
        self.read()
            .published
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.read().published.iter().any(|e| e.event_type == event_type)
    }

    pub fn event_count(&self) -> usize {
        self.read().published.len()
    }

    pub fn clear(&self) {
        self.write().published.clear();
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        // The guard must be gone before the first await.
        let listeners = {
            let mut state = self.write();
            state.published.push(event.clone());
            state
                .handlers
                .get(&event.event_type)
                .cloned()
                .unwrap_or_default()
        };

        let mut failed = Vec::new();
        for listener in listeners {
            if let Err(e) = listener.handle(event.clone()).await {
                failed.push(format!("{}: {}", listener.name(), e));
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::EventPublishFailed,
                format!("{} listener(s) failed: {}", failed.len(), failed.join(", ")),
            )
            .with_detail("event_type", event.event_type))
        }
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_all(&[event_type], handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut state = self.write();
        for event_type in event_types {
            state
                .handlers
                .entry((*event_type).to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}
