//! Configuration errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::query::QueryError;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors. All are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON for the expected shape
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dialect override names an unsupported dialect
    #[error(transparent)]
    Dialect(#[from] QueryError),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
