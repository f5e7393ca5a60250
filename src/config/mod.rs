//! Startup configuration for stores-api
//!
//! Configuration comes from the process environment, optionally backed by a
//! local env file. The hosted-database project key is required; a missing
//! key fails startup, never the first request.

mod errors;
mod settings;

pub use errors::{ConfigError, ConfigResult};
pub use settings::{AppConfig, PROJECT_KEY_VAR};
