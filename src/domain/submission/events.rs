//! Lifecycle notifications published to the host.
//!
//! Identity fields travel in the envelope, so each event serializes to
//! exactly the detail the host observes.

use serde::Serialize;

use crate::domain::foundation::{domain_event, EventId, Timestamp, WidgetId};

use super::feedback::{messages, FailureKind};
use super::payload::SubmissionPayload;

/// Aggregate type stamped on every widget event.
pub const AGGREGATE_TYPE: &str = "InquiryWidget";

/// Fired once validation passes, before the transport is called.
#[derive(Debug, Clone, Serialize)]
pub struct FormSubmitted {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip)]
    pub widget_id: WidgetId,
    #[serde(flatten)]
    pub payload: SubmissionPayload,
    #[serde(skip)]
    pub occurred_at: Timestamp,
}

impl FormSubmitted {
    pub fn new(widget_id: WidgetId, payload: SubmissionPayload) -> Self {
        Self {
            event_id: EventId::new(),
            widget_id,
            payload,
            occurred_at: Timestamp::now(),
        }
    }
}

domain_event!(FormSubmitted, event_type = "form-submit", aggregate_type = AGGREGATE_TYPE);

/// Fired after the endpoint acknowledged the submission.
#[derive(Debug, Clone, Serialize)]
pub struct FormSucceeded {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip)]
    pub widget_id: WidgetId,
    pub message: String,
    #[serde(skip)]
    pub occurred_at: Timestamp,
}

impl FormSucceeded {
    pub fn new(widget_id: WidgetId) -> Self {
        Self {
            event_id: EventId::new(),
            widget_id,
            message: messages::SUBMITTED.to_string(),
            occurred_at: Timestamp::now(),
        }
    }
}

domain_event!(FormSucceeded, event_type = "form-success", aggregate_type = AGGREGATE_TYPE);

/// Fired after a failed attempt, carrying the error detail.
#[derive(Debug, Clone, Serialize)]
pub struct FormFailed {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip)]
    pub widget_id: WidgetId,
    pub error: String,
    pub kind: FailureKind,
    #[serde(skip)]
    pub occurred_at: Timestamp,
}

impl FormFailed {
    pub fn new(widget_id: WidgetId, error: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            event_id: EventId::new(),
            widget_id,
            error: error.into(),
            kind,
            occurred_at: Timestamp::now(),
        }
    }
}

domain_event!(FormFailed, event_type = "form-error", aggregate_type = AGGREGATE_TYPE);
