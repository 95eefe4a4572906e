//! # Query Module
//!
//! Dialect selection and parameterized statement construction for the
//! company table.

mod builder;
mod dialect;
mod errors;

pub use builder::{BindValue, Operation, QueryBuilder, Statement};
pub use dialect::Dialect;
pub use errors::QueryError;
