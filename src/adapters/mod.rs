//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the wizard to its host and the network:
//! - `transport` - HTTP and mock submission transports
//! - `events` - In-process event bus and logging handler
//! - `theme` - Fixed and environment theme resolvers
//! - `phone_mask` - Built-in digit-block phone mask
//! - `view` - Logging and recording view renderers

pub mod events;
pub mod phone_mask;
pub mod theme;
pub mod transport;
pub mod view;

pub use events::{InMemoryEventBus, TracingEventHandler};
pub use phone_mask::{BuiltinMaskLoader, DigitBlockMask};
pub use theme::{EnvThemeResolver, FixedThemeResolver};
pub use transport::{HttpSubmissionTransport, HttpTransportConfig, MockTransport};
pub use view::{RecordingViewRenderer, TracingViewRenderer};
