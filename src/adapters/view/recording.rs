//! Renderer that stores snapshots.

use std::sync::Mutex;

use crate::domain::wizard::WizardView;
use crate::ports::ViewRenderer;

/// Keeps every rendered snapshot, oldest first.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug, Default)]
pub struct RecordingViewRenderer {
    views: Mutex<Vec<WizardView>>,
}

impl RecordingViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<WizardView> {
        self.views
            .lock()
            .expect("RecordingViewRenderer: lock poisoned")
            .clone()
    }

    pub fn last(&self) -> Option<WizardView> {
        self.views
            .lock()
            .expect("RecordingViewRenderer: lock poisoned")
            .last()
            .cloned()
    }

    pub fn render_count(&self) -> usize {
        self.views
            .lock()
            .expect("RecordingViewRenderer: lock poisoned")
            .len()
    }
}

impl ViewRenderer for RecordingViewRenderer {
    fn render(&self, view: &WizardView) {
        self.views
            .lock()
            .expect("RecordingViewRenderer: lock poisoned")
            .push(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormDefinition;
    use crate::domain::wizard::Wizard;
    use std::sync::Arc;

    #[test]
    fn records_in_order() {
        let renderer = RecordingViewRenderer::new();
        let wizard = Wizard::new(Arc::new(FormDefinition::inquiry()));
        renderer.render(&WizardView::capture(&wizard));
        renderer.render(&WizardView::capture(&wizard).with_header("Second", None));

        assert_eq!(renderer.render_count(), 2);
        assert_eq!(renderer.last().unwrap().title, "Second");
    }
}
