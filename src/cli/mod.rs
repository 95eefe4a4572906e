//! CLI module for the company API
//!
//! Provides command-line interface for:
//! - serve: Connect to the database and serve HTTP
//! - show-config: Print the effective configuration

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{load_config, run, run_command, serve, show_config, Overrides};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
