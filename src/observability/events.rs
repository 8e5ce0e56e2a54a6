//! Observable events
//!
//! Every log line the service emits names one of these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Server configuration resolved
    ConfigLoaded,
    /// Country dataset loaded and validated
    DatasetLoaded,
    /// Dataset could not be loaded (FATAL)
    DatasetInvalid,
    /// Listener bound, ready to serve
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Listener closed
    ShutdownComplete,
    /// Ctrl-C handler could not be installed; serving until killed
    SignalUnavailable,

    // Requests
    /// Request answered with 2xx/3xx
    RequestComplete,
    /// Request answered with 4xx
    RequestRejected,
    /// Request answered with 5xx
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetInvalid => "DATASET_INVALID",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::SignalUnavailable => "SIGNAL_UNAVAILABLE",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns true if this event indicates the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetInvalid)
    }

    /// Event for a finished request with the given status code
    pub fn for_status(status: u16) -> Self {
        match status {
            500.. => Event::RequestFailed,
            400..=499 => Event::RequestRejected,
            _ => Event::RequestComplete,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
