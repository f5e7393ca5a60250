//! CLI module for stores-api
//!
//! Provides command-line interface for:
//! - start: Load configuration and serve the HTTP API
//! - check: Load and validate configuration, then exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, start};
pub use errors::{CliError, CliResult};
