//! InquiryWidget - The mounted widget.
//!
//! Owns one `Wizard` plus everything around it: the toast slot, the submit
//! guard, theme resolution and the optional phone mask. Every state change
//! is pushed to the `ViewRenderer` as a fresh `WizardView`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::domain::appearance::{Styling, Theme, ThemePreference};
use crate::domain::form::{ConditionalChange, FieldKind, FormDefinition};
use crate::domain::foundation::{DomainError, StateMachine, WidgetId};
use crate::domain::notification::{Toast, ToastPhase, ToastSlot};
use crate::domain::submission::{
    messages, validate_for_submission, SubmissionPayload, SubmissionPhase,
};
use crate::domain::wizard::{FieldEvent, StepValidationError, Wizard, WizardError, WizardView};
use crate::ports::{
    Ack, EventPublisher, MaskLoadError, PhoneMask, PhoneMaskLoader, SubmissionTransport,
    ThemeResolver, TransportError, ViewRenderer,
};

use super::handlers::{SubmissionError, SubmitInquiryHandler};

/// Upper bound on waiting for a phone mask loader.
pub const MASK_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// An explicit theme option wins; otherwise the host's ambient preference
/// decides.
pub fn resolve_theme(preference: ThemePreference, resolver: &dyn ThemeResolver) -> Theme {
    preference.resolve(|| resolver.prefers_dark())
}

/// Host-provided collaborators.
pub struct WidgetPorts {
    pub transport: Arc<dyn SubmissionTransport>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub theme_resolver: Arc<dyn ThemeResolver>,
    pub renderer: Arc<dyn ViewRenderer>,
}

pub struct InquiryWidget {
    id: WidgetId,
    title: String,
    subtitle: Option<String>,
    theme_preference: ThemePreference,
    styling: Styling,
    wizard: Wizard,
    toasts: ToastSlot,
    phase: SubmissionPhase,
    /// Correlation ID of the outstanding attempt.
    attempt: Option<String>,
    focus: Option<String>,
    phone_mask: Option<Arc<dyn PhoneMask>>,
    handler: SubmitInquiryHandler,
    theme_resolver: Arc<dyn ThemeResolver>,
    renderer: Arc<dyn ViewRenderer>,
}

impl InquiryWidget {
    /// Builds the form variant named by the configuration and renders the
    /// first step. Configuration is read once here.
    pub fn mount(config: &WidgetConfig, ports: WidgetPorts) -> Self {
        let id = WidgetId::new();
        let definition = Arc::new(FormDefinition::inquiry_variant(
            config.form.include_business_step,
        ));

        tracing::info!(
            widget_id = %id,
            steps = definition.total_steps(),
            endpoint = %ports.transport.endpoint(),
            "Mounting inquiry widget"
        );

        let widget = Self {
            id,
            title: config.form.title.clone(),
            subtitle: config.form.subtitle.clone(),
            theme_preference: config.appearance.theme,
            styling: config.appearance.styling(),
            wizard: Wizard::new(definition),
            toasts: ToastSlot::new(config.notifications.timing()),
            phase: SubmissionPhase::Idle,
            attempt: None,
            focus: None,
            phone_mask: None,
            handler: SubmitInquiryHandler::new(ports.transport, ports.event_publisher, id),
            theme_resolver: ports.theme_resolver,
            renderer: ports.renderer,
        };
        widget.render();
        widget
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn has_phone_mask(&self) -> bool {
        self.phone_mask.is_some()
    }

    pub fn theme(&self) -> Theme {
        resolve_theme(self.theme_preference, self.theme_resolver.as_ref())
    }

    pub fn view(&self) -> WizardView {
        WizardView::capture(&self.wizard)
            .with_header(self.title.clone(), self.subtitle.clone())
            .with_submit_enabled(!self.phase.is_in_flight())
            .with_toast(self.toasts.current())
            .with_theme(self.theme(), self.styling.clone())
            .with_focus(self.focus.clone())
    }

    fn render(&self) {
        self.renderer.render(&self.view());
    }

    // === Field input ===

    /// Applies one field event. Phone inputs pass through the mask first
    /// when one is attached.
    pub fn handle_field_event(
        &mut self,
        event: FieldEvent,
    ) -> Result<Vec<ConditionalChange>, WizardError> {
        let event = self.mask_phone_input(event);
        let name = event.name();
        let key = event.key().to_string();

        match self.wizard.handle_field_event(event) {
            Ok(changes) => {
                for change in &changes {
                    tracing::debug!(trigger = %key, change = ?change, "Conditional field updated");
                }
                self.render();
                Ok(changes)
            }
            Err(err) => {
                tracing::warn!(event = name, key = %key, error = %err, "Rejected field event");
                Err(err)
            }
        }
    }

    fn mask_phone_input(&self, event: FieldEvent) -> FieldEvent {
        match (&self.phone_mask, event) {
            (Some(mask), FieldEvent::Input { key, value }) if self.is_phone(&key) => {
                FieldEvent::Input {
                    value: mask.format(&value),
                    key,
                }
            }
            (_, event) => event,
        }
    }

    fn is_phone(&self, key: &str) -> bool {
        self.wizard
            .definition()
            .field(key)
            .is_some_and(|f| f.kind == FieldKind::Phone)
    }

    /// Loads and attaches the phone mask.
    ///
    /// # Errors
    ///
    /// `MaskLoadError` when the loader fails or exceeds `MASK_LOAD_TIMEOUT`.
    /// The widget stays fully usable with unmasked phone inputs.
    pub async fn attach_phone_mask(
        &mut self,
        loader: &dyn PhoneMaskLoader,
    ) -> Result<(), MaskLoadError> {
        let loaded = tokio::time::timeout(MASK_LOAD_TIMEOUT, loader.load())
            .await
            .unwrap_or(Err(MaskLoadError::Timeout));

        match loaded {
            Ok(mask) => {
                tracing::debug!(widget_id = %self.id, "Phone mask attached");
                self.phone_mask = Some(mask);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(widget_id = %self.id, error = %err, "Phone inputs stay unmasked");
                Err(err)
            }
        }
    }

    // === Navigation ===

    pub fn go_next(&mut self) -> Result<usize, StepValidationError> {
        let result = self.wizard.go_next();
        match &result {
            Ok(step) => {
                tracing::debug!(step = *step, "Advanced");
                self.focus = None;
            }
            Err(err) => {
                tracing::debug!(step = err.step, failures = err.failures.len(), "Step gate blocked");
                self.focus = err.first_key().map(str::to_string);
            }
        }
        self.render();
        result
    }

    pub fn go_previous(&mut self) -> bool {
        let moved = self.wizard.go_previous();
        if moved {
            self.focus = None;
            self.render();
        }
        moved
    }

    pub fn jump_to(&mut self, step: usize) -> Result<(), WizardError> {
        self.wizard.jump_to(step)?;
        self.focus = None;
        self.render();
        Ok(())
    }

    // === Submission ===

    /// Validates, then delivers with a single transport call.
    ///
    /// # Errors
    ///
    /// - `Validation` when visible required fields fail; nothing is sent
    /// - `InFlight` when another attempt is outstanding
    /// - `Transport` when delivery fails; values are kept for a retry
    pub async fn submit(&mut self) -> Result<Ack, SubmissionError> {
        let payload = self.begin_submission().await?;
        let outcome = self.handler.deliver(&payload).await;
        self.finish_submission(outcome).await
    }

    /// First half of `submit`: validates, publishes form-submit and marks
    /// the widget in flight. Returns the payload to deliver.
    pub async fn begin_submission(&mut self) -> Result<SubmissionPayload, SubmissionError> {
        if self.phase.is_in_flight() {
            tracing::debug!(widget_id = %self.id, "Submit ignored while in flight");
            return Err(SubmissionError::InFlight);
        }

        if let Err(err) = validate_for_submission(self.wizard.definition(), self.wizard.form()) {
            tracing::info!(failures = err.failures.len(), "Submission blocked by validation");
            self.wizard.mark_failures(&err.failures);
            self.focus = err.first_key().map(str::to_string);
            self.render();
            return Err(err.into());
        }

        let payload = SubmissionPayload::from_form(self.wizard.definition(), self.wizard.form());
        self.phase = self
            .phase
            .transition_to(SubmissionPhase::InFlight)
            .map_err(|_| SubmissionError::InFlight)?;
        self.focus = None;

        let correlation_id = Uuid::new_v4().to_string();
        tracing::info!(
            widget_id = %self.id,
            correlation_id = %correlation_id,
            endpoint = %self.handler.endpoint(),
            "Submitting inquiry"
        );
        self.handler.announce(&payload, &correlation_id).await;
        self.attempt = Some(correlation_id);

        self.render();
        Ok(payload)
    }

    /// Second half of `submit`: applies the transport's resolution.
    ///
    /// Success shows the thank-you toast and resets the form to step 0.
    /// Failure shows a toast for the failure kind and leaves every value
    /// and the current step untouched. Submit is re-enabled either way.
    pub async fn finish_submission(
        &mut self,
        outcome: Result<Ack, TransportError>,
    ) -> Result<Ack, SubmissionError> {
        let Some(correlation_id) = self.attempt.take() else {
            return Err(SubmissionError::NotInFlight);
        };
        self.phase = self
            .phase
            .transition_to(SubmissionPhase::Idle)
            .map_err(|_| SubmissionError::NotInFlight)?;

        match outcome {
            Ok(ack) => {
                self.toasts.show(Toast::success(messages::SUCCESS), Instant::now());
                self.wizard.reset();
                self.focus = None;
                self.handler.report_success(&correlation_id).await;
                self.render();
                Ok(ack)
            }
            Err(err) => {
                self.toasts.show(Toast::error(err.user_message()), Instant::now());
                self.handler.report_failure(&err, &correlation_id).await;
                self.render();
                Err(err.into())
            }
        }
    }

    // === Toasts ===

    /// Advances the toast lifecycle to `now`, rendering when its phase moves.
    pub fn tick(&mut self, now: Instant) -> Result<Option<ToastPhase>, DomainError> {
        let before = self.toasts.current().map(|(_, phase)| phase);
        let after = self.toasts.tick(now)?;
        if before != after {
            self.render();
        }
        Ok(after)
    }

    pub fn dismiss_toast(&mut self) {
        if self.toasts.current().is_some() {
            self.toasts.dismiss();
            self.render();
        }
    }
}
