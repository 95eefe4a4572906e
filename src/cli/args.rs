//! CLI argument definitions using clap
//!
//! Commands:
//! - company-api serve --config <path> [--port N] [--dialect D] [--database-url URL]
//! - company-api show-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "./company_api.json";

/// Company API - REST service for company detail records
#[derive(Parser, Debug)]
#[command(name = "company-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the database and serve the REST API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// SQL dialect: mysql or postgres
        #[arg(long)]
        dialect: Option<String>,

        /// Database connection URL
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Print the effective configuration with secrets masked
    ShowConfig {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "company-api",
            "serve",
            "--port",
            "8080",
            "--dialect",
            "postgres",
            "--database-url",
            "postgres://u@h/db",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                port,
                dialect,
                database_url,
            } => {
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
                assert_eq!(port, Some(8080));
                assert_eq!(dialect.as_deref(), Some("postgres"));
                assert_eq!(database_url.as_deref(), Some("postgres://u@h/db"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_config() {
        let cli = Cli::try_parse_from(["company-api", "show-config", "--config", "x.json"]).unwrap();
        assert!(matches!(cli.command, Command::ShowConfig { config } if config == PathBuf::from("x.json")));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["company-api", "serve", "--port", "http"]).is_err());
    }
}
