//! Observability subsystem
//!
//! Structured logging through `tracing`:
//! - One global subscriber, text or JSON lines
//! - Typed lifecycle events for boot and shutdown
//! - Per-request spans come from the HTTP layer
//!
//! # Usage
//!
//! ```ignore
//! use company_api::observability::{init_logging, log_event, Event};
//!
//! init_logging(&config.logging)?;
//! log_event(Event::BootStart);
//! ```

mod events;
mod logger;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info};

pub use events::Event;
pub use logger::{build_filter, init_logging};

/// Observability error
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Level directive could not be parsed
    #[error("Invalid log filter {0}")]
    Filter(String),

    /// Log file could not be created
    #[error("Cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed
    #[error("Cannot install log subscriber: {0}")]
    Init(String),
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_fatal() {
        error!(event = event.as_str());
    } else {
        info!(event = event.as_str());
    }
}

/// Log a lifecycle event with one detail field
pub fn log_event_with_detail(event: Event, detail: &str) {
    if event.is_fatal() {
        error!(event = event.as_str(), detail);
    } else {
        info!(event = event.as_str(), detail);
    }
}
