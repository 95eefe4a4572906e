//! # Entity Model
//!
//! The Company record and its JSON wire representation.

mod company;

pub use company::{Company, COLUMNS, TABLE};
