//! Renderer that logs each snapshot.

use tracing::{debug, info};

use crate::domain::wizard::WizardView;
use crate::ports::ViewRenderer;

/// Logs a one-line summary at info and the full snapshot at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingViewRenderer;

impl ViewRenderer for TracingViewRenderer {
    fn render(&self, view: &WizardView) {
        info!(
            step = view.current_step,
            title = %view.step_title,
            progress = view.progress,
            next_enabled = view.next_enabled,
            submit_enabled = view.submit_enabled,
            toast = view.toast.as_ref().map(|t| t.message.as_str()).unwrap_or(""),
            "Render"
        );
        match serde_json::to_string(view) {
            Ok(json) => debug!(view = %json, "Render snapshot"),
            Err(e) => debug!(error = %e, "Render snapshot not serializable"),
        }
    }
}
