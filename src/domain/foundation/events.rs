//! Lifecycle notifications and the envelope they travel in.
//!
//! A notification type implements `DomainEvent` (usually through
//! `domain_event!`) and is serializable; `to_envelope()` then wraps its
//! JSON detail together with its identity for the `EventPublisher`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{DomainError, ErrorCode, Timestamp};

/// Identity and routing data of a notification.
pub trait DomainEvent: Send + Sync {
    /// Host-visible name, e.g. "form-submit".
    fn event_type(&self) -> &'static str;

    fn aggregate_id(&self) -> String;

    fn aggregate_type(&self) -> &'static str;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;
}

/// Blanket `to_envelope()` for every serializable `DomainEvent`.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements `DomainEvent` for a widget notification.
///
/// The struct must carry `event_id: EventId`, `widget_id: WidgetId` and
/// `occurred_at: Timestamp`.
///
/// ```ignore
/// domain_event!(FormSucceeded, event_type = "form-success", aggregate_type = AGGREGATE_TYPE);
/// ```
#[macro_export]
macro_rules! domain_event {
    ($event:ident, event_type = $event_type:expr, aggregate_type = $aggregate_type:expr) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.widget_id.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $aggregate_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.occurred_at
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.event_id.clone()
            }
        }
    };
}

pub use domain_event;

/// Per-notification identifier, so hosts can drop duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context shared by the notifications of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Same value on the form-submit and the form-success / form-error
    /// that resolves it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// What the `EventPublisher` receives: identity, timestamp and the JSON
/// detail a host observer sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event_type.into(),
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Serializes `event` as the payload and copies its identity.
    pub fn from_event<T>(event: &T) -> Result<Self, DomainError>
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        let payload = serde_json::to_value(event).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Cannot serialize {} detail: {}", event.event_type(), e),
            )
        })?;

        let mut envelope = Self::new(
            event.event_type(),
            event.aggregate_id(),
            event.aggregate_type(),
            payload,
        );
        envelope.event_id = event.event_id();
        envelope.occurred_at = event.occurred_at();
        Ok(envelope)
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}
