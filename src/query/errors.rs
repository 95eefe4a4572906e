//! Query builder errors

use thiserror::Error;

/// Errors raised while selecting a dialect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Dialect name is not one of the supported dialects
    #[error("Unknown SQL dialect: {0:?} (expected \"mysql\" or \"postgres\")")]
    UnknownDialect(String),
}
