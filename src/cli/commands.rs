//! CLI command implementations
//!
//! Boot sequence for `start`: load configuration (a missing project key
//! fails here, before anything listens), construct the storage collaborator
//! once, then hand it to the HTTP server.

use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::storage::DetaBase;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Start { env_file, port } => start(env_file.as_deref(), port),
        Command::Check { env_file } => check(env_file.as_deref()),
    }
}

/// Load and validate configuration, then exit.
pub fn check(env_file: Option<&Path>) -> CliResult<()> {
    let config = AppConfig::load(env_file)?;

    Logger::info(
        "config_ok",
        &[
            ("base", &config.base_name),
            ("environment", &config.environment),
        ],
    );
    Ok(())
}

/// Boot the server and serve until the process is stopped.
pub fn start(env_file: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = AppConfig::load(env_file)?;
    let http_config = HttpServerConfig::bind(config.host.clone(), port.unwrap_or(config.port));

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to build runtime: {}", e)))?;

    runtime.block_on(async {
        let base = Arc::new(DetaBase::new(&config.project_key, &config.base_name));

        Logger::info(
            "boot",
            &[
                ("base", &config.base_name),
                ("environment", &config.environment),
            ],
        );

        let server = HttpServer::new(http_config, base, config.environment.clone());
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("Server failed: {}", e)))
    })
}
