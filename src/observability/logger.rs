//! Tracing subscriber setup
//!
//! One subscriber per process. `RUST_LOG` takes precedence over the
//! configured level. With a log file configured the file is truncated at
//! startup and receives every line.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

use super::{ObservabilityError, ObservabilityResult};

/// Build the level filter from an optional `RUST_LOG` value and the
/// configured fallback
pub fn build_filter(env_directive: Option<&str>, level: &str) -> ObservabilityResult<EnvFilter> {
    let directive = env_directive.filter(|d| !d.trim().is_empty()).unwrap_or(level);
    EnvFilter::try_new(directive)
        .map_err(|e| ObservabilityError::Filter(format!("{}: {}", directive, e)))
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> ObservabilityResult<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), &config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (&config.file, config.format) {
        (Some(path), format) => {
            let file = File::create(path).map_err(|source| ObservabilityError::LogFile {
                path: path.clone(),
                source,
            })?;
            let writer = Mutex::new(file);
            match format {
                LogFormat::Text => builder.with_ansi(false).with_writer(writer).try_init(),
                LogFormat::Json => builder.json().with_writer(writer).try_init(),
            }
        }
        (None, LogFormat::Text) => builder.try_init(),
        (None, LogFormat::Json) => builder.json().try_init(),
    };

    installed.map_err(|e| ObservabilityError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("company_api=trace"), "info").unwrap();
        assert_eq!(filter.to_string(), "company_api=trace");
    }

    #[test]
    fn test_blank_env_falls_back_to_level() {
        let filter = build_filter(Some(" "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_directive() {
        let result = build_filter(None, "company_api=verbose");
        assert!(matches!(result, Err(ObservabilityError::Filter(_))));
    }
}
