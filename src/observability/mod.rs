//! Observability for the lookup service
//!
//! - Structured JSON logging, one line per event
//! - Typed lifecycle and request events
//! - Atomic request counters
//!
//! # Usage
//!
//! ```ignore
//! use restcountries::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("countries", "250")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_status(200);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::RequestFailed => Severity::Error,
        Event::RequestRejected | Event::SignalUnavailable => Severity::Warn,
        _ => Severity::Info,
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields; errors go to stderr
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = severity_for(event);
    if severity >= Severity::Error {
        Logger::log_stderr(severity, event.as_str(), fields);
    } else {
        Logger::log(severity, event.as_str(), fields);
    }
}
