//! # HTTP Server Module
//!
//! Serves the company REST API over HTTP.
//!
//! # Endpoints
//!
//! - `GET /` - API documentation
//! - `GET|POST /Company_Detail` - list, create
//! - `GET|PUT|DELETE /Company_Detail/{id}` - get, update, delete

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
