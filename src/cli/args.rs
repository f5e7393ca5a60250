//! CLI argument definitions using clap
//!
//! Commands:
//! - stores-api start [--env-file <path>] [--port <port>]
//! - stores-api check [--env-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stores-api - CRUD HTTP API for retail store listings
#[derive(Parser, Debug)]
#[command(name = "stores-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Start {
        /// Path to an env file holding the project key
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate configuration, then exit
    Check {
        /// Path to an env file holding the project key
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
