//! SubmitInquiryHandler - Delivers a validated payload and announces the outcome.
//!
//! One attempt is split in three so the widget can update its own state
//! between them: `announce` (form-submit), `deliver` (the transport call)
//! and `report_success` / `report_failure` (form-success / form-error).
//! Events of one attempt share a correlation ID.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainEvent, SerializableDomainEvent, WidgetId};
use crate::domain::submission::{
    FormFailed, FormSubmitted, FormSucceeded, SubmissionPayload, SubmissionValidationError,
};
use crate::ports::{Ack, EventPublisher, SubmissionTransport, TransportError};

/// Why a submit request did not end in an acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Client-side validation failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] SubmissionValidationError),

    /// The transport call failed; the form keeps its values.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Another attempt is still outstanding.
    #[error("a submission is already in flight")]
    InFlight,

    /// `finish` was called with no attempt outstanding.
    #[error("no submission is in flight")]
    NotInFlight,
}

/// Handler for delivering inquiries.
pub struct SubmitInquiryHandler {
    transport: Arc<dyn SubmissionTransport>,
    event_publisher: Arc<dyn EventPublisher>,
    widget_id: WidgetId,
}

impl SubmitInquiryHandler {
    pub fn new(
        transport: Arc<dyn SubmissionTransport>,
        event_publisher: Arc<dyn EventPublisher>,
        widget_id: WidgetId,
    ) -> Self {
        Self {
            transport,
            event_publisher,
            widget_id,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Publishes form-submit with the exact payload about to be sent.
    pub async fn announce(&self, payload: &SubmissionPayload, correlation_id: &str) {
        let event = FormSubmitted::new(self.widget_id, payload.clone());
        self.publish(&event, correlation_id).await;
    }

    /// Single delivery attempt. Never retried.
    pub async fn deliver(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError> {
        tracing::debug!(endpoint = %self.transport.endpoint(), "Delivering submission");

        match self.transport.submit(payload).await {
            Ok(ack) => {
                tracing::info!(status = ack.status, "Submission acknowledged");
                Ok(ack)
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), error = %err, "Submission failed");
                Err(err)
            }
        }
    }

    pub async fn report_success(&self, correlation_id: &str) {
        let event = FormSucceeded::new(self.widget_id);
        self.publish(&event, correlation_id).await;
    }

    pub async fn report_failure(&self, error: &TransportError, correlation_id: &str) {
        let event = FormFailed::new(self.widget_id, error.to_string(), error.kind());
        self.publish(&event, correlation_id).await;
    }

    /// Notification failures are logged and never change the outcome.
    async fn publish<E: SerializableDomainEvent>(&self, event: &E, correlation_id: &str) {
        let envelope = match event.to_envelope() {
            Ok(envelope) => envelope.with_correlation_id(correlation_id),
            Err(err) => {
                tracing::warn!(event_type = event.event_type(), error = %err, "Failed to build event");
                return;
            }
        };

        if let Err(err) = self.event_publisher.publish(envelope).await {
            tracing::warn!(event_type = event.event_type(), error = %err, "Failed to publish event");
        }
    }
}
