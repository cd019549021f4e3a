//! Event handler that writes notifications to the log.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Logs each notification at info level with its detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventHandler;

#[async_trait]
impl EventHandler for TracingEventHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        info!(
            event_type = %event.event_type,
            widget_id = %event.aggregate_id,
            event_id = %event.event_id,
            detail = %event.payload,
            "Widget notification"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "TracingEventHandler"
    }
}
