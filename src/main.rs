//! Company API entry point
//!
//! Parses CLI arguments and dispatches to the CLI module. Errors are
//! printed to stderr and the process exits non-zero.

use company_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
