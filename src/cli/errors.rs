//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints the error and exits 1.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::db::DbError;
use crate::observability::ObservabilityError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or override error
    ConfigError,
    /// Logging could not be set up
    LoggingError,
    /// Database unreachable or misconfigured
    DatabaseError,
    /// I/O error (stdout, listener)
    IoError,
    /// Runtime or server failure
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "COMPANY_CLI_CONFIG_ERROR",
            Self::LoggingError => "COMPANY_CLI_LOGGING_ERROR",
            Self::DatabaseError => "COMPANY_CLI_DATABASE_ERROR",
            Self::IoError => "COMPANY_CLI_IO_ERROR",
            Self::ServeFailed => "COMPANY_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Serving failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<ObservabilityError> for CliError {
    fn from(e: ObservabilityError) -> Self {
        Self::new(CliErrorCode::LoggingError, e.to_string())
    }
}

impl From<DbError> for CliError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Config(e) => e.into(),
            other => Self::new(CliErrorCode::DatabaseError, other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Dialect;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("missing url");
        assert_eq!(err.to_string(), "COMPANY_CLI_CONFIG_ERROR: missing url");
    }

    #[test]
    fn test_db_error_mapping() {
        let err: CliError = DbError::DialectMismatch {
            dialect: Dialect::MySql,
            scheme: "postgres".to_string(),
        }
        .into();
        assert_eq!(err.code(), &CliErrorCode::DatabaseError);

        let err: CliError = DbError::Config(ConfigError::Invalid("no host".to_string())).into();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
