//! End-to-end tests of the mounted widget.
//!
//! These tests drive an `InquiryWidget` the way a host page would:
//! 1. Field events fill the form step by step
//! 2. `go_next` walks to the review step
//! 3. `submit` delivers through a scripted transport
//! 4. Lifecycle events and rendered views are inspected
//!
//! Uses in-memory adapters, so no network is involved.

use std::sync::Arc;
use std::time::Duration;

use inquiry_wizard::adapters::{
    FixedThemeResolver, InMemoryEventBus, MockTransport, RecordingViewRenderer,
};
use inquiry_wizard::application::{InquiryWidget, SubmissionError, WidgetPorts};
use inquiry_wizard::config::WidgetConfig;
use inquiry_wizard::domain::form::{keys, messages as field_messages, FieldValue};
use inquiry_wizard::domain::notification::ToastKind;
use inquiry_wizard::domain::review::NOT_PROVIDED;
use inquiry_wizard::domain::submission::{messages, SubmissionPayload};
use inquiry_wizard::domain::wizard::{FieldEvent, FieldStatus, PrimaryAction};
use inquiry_wizard::ports::TransportError;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Host {
    widget: InquiryWidget,
    transport: MockTransport,
    bus: Arc<InMemoryEventBus>,
    renderer: Arc<RecordingViewRenderer>,
}

fn mount(transport: MockTransport) -> Host {
    let bus = Arc::new(InMemoryEventBus::new());
    let renderer = Arc::new(RecordingViewRenderer::new());
    let widget = InquiryWidget::mount(
        &WidgetConfig::default(),
        WidgetPorts {
            transport: Arc::new(transport.clone()),
            event_publisher: bus.clone(),
            theme_resolver: Arc::new(FixedThemeResolver::light()),
            renderer: renderer.clone(),
        },
    );
    Host {
        widget,
        transport,
        bus,
        renderer,
    }
}

fn input(widget: &mut InquiryWidget, key: &str, value: &str) {
    widget
        .handle_field_event(FieldEvent::input(key, value))
        .unwrap();
}

fn select(widget: &mut InquiryWidget, key: &str, value: &str) {
    widget
        .handle_field_event(FieldEvent::select(key, value))
        .unwrap();
}

/// Fills every step with valid answers and walks to the review step.
fn complete_to_review(widget: &mut InquiryWidget) {
    input(widget, keys::FIRST_NAME, "Ada");
    input(widget, keys::LAST_NAME, "Lovelace");
    input(widget, keys::EMAIL, "ada@example.com");
    input(widget, keys::PHONE, "555-123-4567");
    widget
        .handle_field_event(FieldEvent::toggle(keys::PHONE_EXT_CHECK, true))
        .unwrap();
    input(widget, keys::PHONE_EXT, "42");
    assert_eq!(widget.go_next().unwrap(), 1);

    input(widget, keys::BUSINESS_NAME, "Analytical Engines Ltd");
    assert_eq!(widget.go_next().unwrap(), 2);

    input(widget, keys::BILLING_STREET, "1 Analytical Way");
    input(widget, keys::BILLING_CITY, "London");
    input(widget, keys::BILLING_STATE, "LDN");
    input(widget, keys::BILLING_ZIP_CODE, "12345-6789");
    assert_eq!(widget.go_next().unwrap(), 3);

    select(widget, keys::PREFERRED_CONTACT, "email");
    select(widget, keys::SERVICE_DESIRED, "App Development");
    select(widget, keys::HAS_WEBSITE, "yes");
    input(widget, keys::WEBSITE_ADDRESS, "example.com");
    assert_eq!(widget.go_next().unwrap(), 4);
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn walking_forward_marks_steps_completed_and_shows_submit() {
    let mut host = mount(MockTransport::new());

    complete_to_review(&mut host.widget);

    let view = host.renderer.last().unwrap();
    assert_eq!(view.current_step, 4);
    assert_eq!(view.completed_steps, vec![0, 1, 2, 3]);
    assert_eq!(view.progress, 1.0);
    assert_eq!(view.primary_action, PrimaryAction::Submit);
    assert!(view.submit_enabled);
    assert!(view.show_previous);
}

#[test]
fn editing_from_review_keeps_other_answers() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);

    host.widget.jump_to(0).unwrap();
    input(&mut host.widget, keys::FIRST_NAME, "Augusta");

    let form = host.widget.wizard().form();
    assert_eq!(form.text(keys::FIRST_NAME), "Augusta");
    assert_eq!(form.text(keys::BILLING_CITY), "London");
    assert_eq!(
        host.widget.wizard().state().completed_steps().len(),
        4,
        "jumping back does not drop completion marks"
    );
}

#[test]
fn review_reflects_entered_and_missing_values() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);

    let view = host.renderer.last().unwrap();
    let personal = &view.review[0];
    assert_eq!(personal.title, "Personal Information");
    assert_eq!(personal.item(keys::FIRST_NAME).unwrap().display_value, "Ada");

    let text_number = personal.item(keys::TEXT_NUMBER).unwrap();
    assert!(text_number.is_empty);
    assert_eq!(text_number.display_value, NOT_PROVIDED);

    let service = &view.review[3];
    assert_eq!(
        service.item(keys::SERVICE_DESIRED).unwrap().display_value,
        "App Development"
    );
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn successful_submission_resets_the_widget() {
    let mut host = mount(MockTransport::new().with_ack(201));
    complete_to_review(&mut host.widget);

    let ack = host.widget.submit().await.unwrap();

    assert_eq!(ack.status, 201);
    let wizard = host.widget.wizard();
    assert_eq!(wizard.state().current_step(), 0);
    assert!(wizard.state().completed_steps().is_empty());
    assert_eq!(wizard.form().text(keys::FIRST_NAME), "");
    assert_eq!(wizard.form().text(keys::BILLING_COUNTRY), "USA");
    assert!(wizard.statuses().is_empty());

    let view = host.renderer.last().unwrap();
    let toast = view.toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, messages::SUCCESS);

    assert_eq!(host.bus.event_types(), vec!["form-submit", "form-success"]);
    let success = &host.bus.events_of_type("form-success")[0];
    assert_eq!(success.payload["message"], messages::SUBMITTED);
}

#[tokio::test]
async fn server_error_keeps_form_and_step() {
    let transport = MockTransport::new().with_error(TransportError::Rejected {
        status: 500,
        message: None,
    });
    let mut host = mount(transport);
    complete_to_review(&mut host.widget);
    let before = host.widget.wizard().form().clone();

    let err = host.widget.submit().await.unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Transport(TransportError::Rejected { status: 500, .. })
    ));
    assert_eq!(host.widget.wizard().form(), &before);
    assert_eq!(host.widget.wizard().state().current_step(), 4);

    let view = host.renderer.last().unwrap();
    assert!(view.submit_enabled, "submit is re-enabled after failure");
    let toast = view.toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, messages::GENERIC);

    assert_eq!(host.bus.event_types(), vec!["form-submit", "form-error"]);
    let error = &host.bus.events_of_type("form-error")[0];
    assert_eq!(error.payload["kind"], "generic");
}

#[tokio::test]
async fn failed_attempt_can_be_retried() {
    let transport = MockTransport::new()
        .with_error(TransportError::Connectivity {
            endpoint: "mock://submissions".into(),
            message: "connection refused".into(),
        })
        .with_ack(200);
    let mut host = mount(transport);
    complete_to_review(&mut host.widget);

    let first = host.widget.submit().await.unwrap_err();
    assert!(matches!(first, SubmissionError::Transport(_)));
    assert_eq!(
        host.renderer.last().unwrap().toast.unwrap().message,
        messages::CONNECTIVITY
    );

    host.widget.submit().await.unwrap();
    assert_eq!(host.transport.call_count(), 2);
}

#[tokio::test]
async fn website_yes_without_address_blocks_submission() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);
    host.widget.jump_to(3).unwrap();
    input(&mut host.widget, keys::WEBSITE_ADDRESS, "");

    let err = host.widget.submit().await.unwrap_err();

    let SubmissionError::Validation(validation) = err else {
        panic!("expected validation failure, got {:?}", err);
    };
    assert_eq!(validation.first_key(), Some(keys::WEBSITE_ADDRESS));
    assert_eq!(host.transport.call_count(), 0);
    assert!(host.bus.published_events().is_empty());

    let view = host.renderer.last().unwrap();
    assert_eq!(view.focus.as_deref(), Some(keys::WEBSITE_ADDRESS));
    assert_eq!(
        view.field(keys::WEBSITE_ADDRESS).unwrap().status,
        FieldStatus::Invalid(field_messages::REQUIRED.to_string())
    );
}

#[tokio::test]
async fn submit_reports_every_missing_field_across_steps() {
    let mut host = mount(MockTransport::new());
    input(&mut host.widget, keys::FIRST_NAME, "Ada");

    let err = host.widget.submit().await.unwrap_err();

    let SubmissionError::Validation(validation) = err else {
        panic!("expected validation failure, got {:?}", err);
    };
    let keys_failing: Vec<_> = validation.failures.iter().map(|f| f.key.as_str()).collect();
    assert!(keys_failing.contains(&keys::LAST_NAME));
    assert!(keys_failing.contains(&keys::BILLING_STREET));
    assert!(keys_failing.contains(&keys::SERVICE_DESIRED));
    assert!(!keys_failing.contains(&keys::FIRST_NAME));
    assert_eq!(host.transport.call_count(), 0);
}

#[tokio::test]
async fn announced_payload_matches_delivered_payload() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);

    host.widget.submit().await.unwrap();

    let delivered = host.transport.calls().pop().unwrap();
    let announced: SubmissionPayload = host.bus.events_of_type("form-submit")[0]
        .payload_as()
        .unwrap();
    assert_eq!(announced, delivered);

    assert_eq!(delivered.value(keys::PHONE_EXT), Some("42"));
    assert_eq!(delivered.value(keys::WEBSITE_ADDRESS), Some("example.com"));
    assert_eq!(
        delivered.fields.get(keys::PHONE_EXT_CHECK),
        Some(&FieldValue::Flag(true))
    );
    assert_eq!(delivered.billing_address.zip_code, "12345-6789");
    assert_eq!(delivered.billing_address.country, "USA");
    assert!(delivered.is_form_submission);
}

#[tokio::test]
async fn review_shows_exactly_what_is_submitted() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);

    host.widget.jump_to(0).unwrap();
    input(&mut host.widget, keys::FIRST_NAME, " Ada ");
    input(&mut host.widget, keys::TEXT_NUMBER, "555-000-1111");
    assert_eq!(host.widget.go_next().unwrap(), 1);
    input(&mut host.widget, keys::BUSINESS_PHONE, "555-987-6543");
    host.widget
        .handle_field_event(FieldEvent::toggle(keys::BUSINESS_PHONE_EXT_CHECK, true))
        .unwrap();
    input(&mut host.widget, keys::BUSINESS_PHONE_EXT, "204");
    input(&mut host.widget, keys::BUSINESS_EMAIL, "office@engines.example");
    input(&mut host.widget, keys::BUSINESS_SERVICES, "Difference engines  ");
    assert_eq!(host.widget.go_next().unwrap(), 2);
    input(&mut host.widget, keys::BILLING_APT_UNIT, "Unit 7");
    assert_eq!(host.widget.go_next().unwrap(), 3);
    input(&mut host.widget, keys::MESSAGE, "  Call after noon");
    assert_eq!(host.widget.go_next().unwrap(), 4);
    let review = host.widget.wizard().review().to_vec();

    host.widget.submit().await.unwrap();

    let delivered = host.transport.calls().pop().unwrap();
    let text_keys: Vec<_> = delivered
        .fields
        .iter()
        .filter(|(_, v)| matches!(v, FieldValue::Text(_)))
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(text_keys.len(), 22);
    for key in text_keys {
        let item = review
            .iter()
            .find_map(|section| section.item(key))
            .unwrap_or_else(|| panic!("{} missing from review", key));
        assert_eq!(item.value(), delivered.value(key), "value of {}", key);
    }
    assert_eq!(delivered.value(keys::FIRST_NAME), Some(" Ada "));
}

#[tokio::test]
async fn unchecked_extension_is_omitted_from_payload() {
    let mut host = mount(MockTransport::new());
    complete_to_review(&mut host.widget);
    host.widget.jump_to(0).unwrap();
    host.widget
        .handle_field_event(FieldEvent::toggle(keys::PHONE_EXT_CHECK, false))
        .unwrap();

    host.widget.submit().await.unwrap();

    let delivered = host.transport.calls().pop().unwrap();
    assert!(!delivered.contains(keys::PHONE_EXT));
}

#[tokio::test]
async fn submit_is_disabled_while_in_flight() {
    let transport = MockTransport::new().with_delay(Duration::from_millis(20));
    let mut host = mount(transport);
    complete_to_review(&mut host.widget);

    let payload = host.widget.begin_submission().await.unwrap();
    assert!(!host.renderer.last().unwrap().submit_enabled);
    assert_eq!(
        host.widget.begin_submission().await.unwrap_err(),
        SubmissionError::InFlight
    );

    let outcome = {
        use inquiry_wizard::ports::SubmissionTransport;
        host.transport.submit(&payload).await
    };
    host.widget.finish_submission(outcome).await.unwrap();

    assert!(!host.widget.phase().is_in_flight());
    assert_eq!(host.bus.events_of_type("form-submit").len(), 1);
}
