//! # Company REST API Module
//!
//! Handlers, routing and shared context for the `Company_Detail` endpoints.

pub mod context;
pub mod errors;
pub mod handlers;
pub mod parser;
pub mod routes;

pub use context::{AppContext, SharedContext};
pub use errors::{ApiError, ApiResult, ErrorResponse, NOT_FOUND_BODY};
pub use handlers::HOMEPAGE;
pub use parser::{ListQuery, Page};
pub use routes::company_routes;
