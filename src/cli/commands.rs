//! CLI command implementations
//!
//! Boot order for `serve`: configuration, logging, database, HTTP listener.
//! Any failure before the listener is bound aborts startup.

use std::path::Path;

use crate::config::{AppConfig, ConfigError};
use crate::db::Database;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, log_event_with_detail, Event};
use crate::rest_api::AppContext;

use super::args::{Cli, Command, DEFAULT_CONFIG_PATH};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Flag values that override the file and environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub dialect: Option<String>,
    pub database_url: Option<String>,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            dialect,
            database_url,
        } => serve(
            &config,
            Overrides {
                port,
                dialect,
                database_url,
            },
        ),
        Command::ShowConfig { config } => show_config(&config),
    }
}

/// Load the effective configuration: file, then environment, then flags.
///
/// The file may only be missing when the default path is used.
pub fn load_config(config_path: &Path, overrides: &Overrides) -> CliResult<AppConfig> {
    let required = config_path != Path::new(DEFAULT_CONFIG_PATH);
    let mut config = AppConfig::load(config_path, required)?;
    config.apply_env()?;
    apply_overrides(&mut config, overrides)?;
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, overrides: &Overrides) -> Result<(), ConfigError> {
    if let Some(port) = overrides.port {
        config.http.port = port;
    }
    if let Some(dialect) = &overrides.dialect {
        config.database.dialect = dialect.parse()?;
    }
    if let Some(url) = &overrides.database_url {
        config.database.url = Some(url.clone());
    }
    Ok(())
}

/// Connect to the database and serve until a shutdown signal
pub fn serve(config_path: &Path, overrides: Overrides) -> CliResult<()> {
    let config = load_config(config_path, &overrides)?;
    config.validate()?;

    init_logging(&config.logging)?;
    log_event(Event::BootStart);
    log_event_with_detail(Event::ConfigLoaded, &config_path.display().to_string());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let db = Database::connect(&config.database).await.map_err(|e| {
            log_event_with_detail(Event::DatabaseUnavailable, &e.to_string());
            CliError::from(e)
        })?;
        log_event_with_detail(Event::DatabaseConnected, config.database.dialect.as_str());

        let ctx = AppContext::new(db.clone()).shared();
        let server = HttpServer::new(config.http.clone(), ctx);
        log_event_with_detail(Event::BootComplete, &server.socket_addr());

        let result = server.start().await;

        log_event(Event::ShutdownStart);
        db.close().await;
        log_event(Event::ShutdownComplete);

        result.map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration with the password masked
pub fn show_config(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path, &Overrides::default())?;
    write_json(&config.redacted())
}
