//! company_api - REST CRUD service for company detail records
//!
//! A thin layer between HTTP requests, parameterized SQL statements for
//! MySQL or PostgreSQL, and JSON payloads.

pub mod cli;
pub mod config;
pub mod db;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod query;
pub mod rest_api;
