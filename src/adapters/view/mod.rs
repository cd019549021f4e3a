//! View renderer adapters.
//!
//! - `TracingViewRenderer` - Logs each snapshot
//! - `RecordingViewRenderer` - Keeps every snapshot for inspection

mod recording;
mod tracing_renderer;

pub use recording::RecordingViewRenderer;
pub use tracing_renderer::TracingViewRenderer;
