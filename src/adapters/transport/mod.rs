//! Submission transport adapters.
//!
//! - `HttpSubmissionTransport` - JSON POST via reqwest
//! - `MockTransport` - Scripted outcomes for tests and demos

mod http;
mod mock;

pub use http::{HttpSubmissionTransport, HttpTransportConfig};
pub use mock::MockTransport;
