//! Database errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::query::Dialect;

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Database errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection settings could not produce a URL
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// URL scheme does not belong to the configured dialect
    #[error("Connection URL scheme {scheme:?} does not match dialect {dialect}")]
    DialectMismatch { dialect: Dialect, scheme: String },

    /// Pool could not be opened or the first ping failed
    #[error("Cannot connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// Statement execution or row mapping failed
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}
