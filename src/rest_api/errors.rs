//! # REST API Errors
//!
//! Every handler failure maps to one of these variants, which always render
//! a complete response with an explicit status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::db::DbError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Body of a not-found response
pub const NOT_FOUND_BODY: &str = "no record";

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not a valid company payload
    #[error("Invalid request body: {0}")]
    Decode(String),

    /// Path or query parameter could not be decoded
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// No row for the requested id
    #[error("{}", NOT_FOUND_BODY)]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Connection or statement failure
    #[error("{0}")]
    Database(#[from] DbError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller
    fn public_message(&self) -> String {
        match self {
            // Driver messages can carry SQL and server details.
            ApiError::Database(_) => "Database error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(e) => error!(error = %e, "Request failed"),
            ApiError::NotFound => warn!("No record"),
            e => warn!(error = %e, "Rejected request"),
        }

        match self {
            ApiError::NotFound => (status, NOT_FOUND_BODY).into_response(),
            other => (status, Json(ErrorResponse::from(&other))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Decode("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidParam("id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);

        let db = ApiError::from(DbError::Query(sqlx::Error::PoolClosed));
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_details_are_not_exposed() {
        let err = ApiError::from(DbError::Query(sqlx::Error::Protocol(
            "SELECT secret FROM t".to_string(),
        )));
        let body = ErrorResponse::from(&err);

        assert_eq!(body.error, "Database error");
        assert_eq!(body.code, 500);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound.to_string(), "no record");
    }
}
