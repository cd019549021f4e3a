//! Mock submission transport for testing.
//!
//! Outcomes are consumed in order; once the queue is empty every call
//! succeeds with status 200. Calls are recorded for assertions.
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_error(TransportError::Rejected { status: 500, message: None })
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::submission::SubmissionPayload;
use crate::ports::{Ack, SubmissionTransport, TransportError};

/// Scripted `SubmissionTransport`.
///
/// # Panics
///
/// Methods panic if an internal lock is poisoned. Intended for tests and
/// demos only.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<Result<Ack, TransportError>>>>,
    calls: Arc<Mutex<Vec<SubmissionPayload>>>,
    delay: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an acknowledgement with the given status.
    pub fn with_ack(self, status: u16) -> Self {
        self.push(Ok(Ack::new(status)))
    }

    /// Queues a failure.
    pub fn with_error(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn push(self, outcome: Result<Ack, TransportError>) -> Self {
        self.outcomes
            .lock()
            .expect("MockTransport: outcomes lock poisoned")
            .push_back(outcome);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("MockTransport: calls lock poisoned")
            .len()
    }

    /// Payloads received, in call order.
    pub fn calls(&self) -> Vec<SubmissionPayload> {
        self.calls
            .lock()
            .expect("MockTransport: calls lock poisoned")
            .clone()
    }
}

#[async_trait]
impl SubmissionTransport for MockTransport {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Ack, TransportError> {
        self.calls
            .lock()
            .expect("MockTransport: calls lock poisoned")
            .push(payload.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.outcomes
            .lock()
            .expect("MockTransport: outcomes lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(Ack::new(200)))
    }

    fn endpoint(&self) -> &str {
        "mock://submissions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FormDefinition, FormState};

    fn payload() -> SubmissionPayload {
        let def = FormDefinition::inquiry();
        SubmissionPayload::from_form(&def, &FormState::initial(&def))
    }

    #[tokio::test]
    async fn replays_queued_outcomes_then_succeeds() {
        let transport = MockTransport::new()
            .with_error(TransportError::Timeout { timeout_secs: 30 })
            .with_ack(201);

        assert!(matches!(
            transport.submit(&payload()).await,
            Err(TransportError::Timeout { .. })
        ));
        assert_eq!(transport.submit(&payload()).await.unwrap().status, 201);
        assert_eq!(transport.submit(&payload()).await.unwrap().status, 200);
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn records_payloads() {
        let transport = MockTransport::new();
        let sent = payload();
        transport.submit(&sent).await.unwrap();
        assert_eq!(transport.calls(), vec![sent]);
    }
}
