//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus delivering notifications to host handlers
//! - `TracingEventHandler` - Handler that logs every notification it receives

mod in_memory;
mod tracing_handler;

pub use in_memory::InMemoryEventBus;
pub use tracing_handler::TracingEventHandler;
