//! ViewRenderer port - Reflects wizard state to the host.

use crate::domain::wizard::WizardView;

/// Called with a fresh snapshot after every state change.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &WizardView);
}
