//! Command-line host for the inquiry widget.
//!
//! ```text
//! inquiry-wizard <answers.json> [config.toml]
//! ```
//!
//! `answers.json` holds an array of field events such as
//! `{"event": "input", "key": "firstName", "value": "Ada"}`. They are
//! applied in order, the wizard is walked to the review step, the review
//! is printed and the inquiry is submitted to the configured endpoint.

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use inquiry_wizard::adapters::{
    BuiltinMaskLoader, EnvThemeResolver, HttpSubmissionTransport, InMemoryEventBus,
    TracingEventHandler, TracingViewRenderer,
};
use inquiry_wizard::application::{InquiryWidget, WidgetPorts};
use inquiry_wizard::config::{LoggingConfig, WidgetConfig};
use inquiry_wizard::domain::submission::messages;
use inquiry_wizard::domain::wizard::FieldEvent;
use inquiry_wizard::ports::EventSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let answers_path = args
        .next()
        .ok_or("usage: inquiry-wizard <answers.json> [config.toml]")?;

    let config = match args.next() {
        Some(path) => WidgetConfig::load_from_file(path)?,
        None => WidgetConfig::load()?,
    };
    config.validate()?;
    init_tracing(&config.logging);

    let transport = HttpSubmissionTransport::new(config.submission.http_transport())?;
    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe_all(
        &["form-submit", "form-success", "form-error"],
        Arc::new(TracingEventHandler),
    );

    let mut widget = InquiryWidget::mount(
        &config,
        WidgetPorts {
            transport: Arc::new(transport),
            event_publisher: bus,
            theme_resolver: Arc::new(EnvThemeResolver::new()),
            renderer: Arc::new(TracingViewRenderer),
        },
    );
    // Logged by the widget; inputs stay unmasked on failure.
    let _ = widget
        .attach_phone_mask(&BuiltinMaskLoader::default())
        .await;

    for event in read_answers(Path::new(&answers_path))? {
        // Rejected events are logged and skipped.
        let _ = widget.handle_field_event(event);
    }

    while !widget.wizard().state().is_terminal() {
        if let Err(err) = widget.go_next() {
            for failure in &err.failures {
                eprintln!("  {}: {}", failure.label, failure.message);
            }
            return Err(err.into());
        }
    }

    for section in widget.wizard().review() {
        println!("{}", section.title);
        for item in &section.items {
            println!("  {}: {}", item.label, item.display_value);
        }
    }

    match widget.submit().await {
        Ok(ack) => {
            println!("{} (status {})", messages::SUCCESS, ack.status);
            Ok(())
        }
        Err(err) => {
            if let Some(toast) = widget.view().toast {
                eprintln!("{}", toast.message);
            }
            Err(err.into())
        }
    }
}

fn read_answers(path: &Path) -> Result<Vec<FieldEvent>, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
