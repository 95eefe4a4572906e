//! Service lifecycle events
//!
//! Events are explicit and typed so startup and shutdown produce a fixed,
//! greppable sequence of log lines.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Database pool opened and pinged
    DatabaseConnected,
    /// Database connection failed (FATAL)
    DatabaseUnavailable,
    /// Listener bound, ready to serve
    BootComplete,
    /// Server stopped accepting requests
    ShutdownStart,
    /// Pool closed, process about to exit
    ShutdownComplete,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatabaseConnected => "DATABASE_CONNECTED",
            Event::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Event::BootComplete => "BOOT_COMPLETE",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    /// Whether the process exits after this event
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatabaseUnavailable)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
