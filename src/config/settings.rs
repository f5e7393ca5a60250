//! Application settings loaded at startup

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::errors::{ConfigError, ConfigResult};

/// Required hosted-database credential
pub const PROJECT_KEY_VAR: &str = "DETA_PROJECT_KEY";

const BASE_NAME_VAR: &str = "STORES_BASE_NAME";
const HOST_VAR: &str = "STORES_HOST";
const PORT_VAR: &str = "STORES_PORT";
const ENVIRONMENT_VAR: &str = "STORES_ENVIRONMENT";

const DEFAULT_BASE_NAME: &str = "stores";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENVIRONMENT: &str = "production";

/// Settings for one process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hosted-database project key, `{project_id}_{secret}`
    pub project_key: String,
    /// Name of the collection holding store records
    pub base_name: String,
    /// HTTP bind host
    pub host: String,
    /// HTTP bind port
    pub port: u16,
    /// Environment label reported by the status endpoint
    pub environment: String,
}

impl AppConfig {
    /// Load settings from the process environment, backed by an env file.
    ///
    /// An explicitly given env file must be readable. With none given, a
    /// `./.env` file is used when present. Process environment always wins
    /// over file values.
    pub fn load(env_file: Option<&Path>) -> ConfigResult<Self> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => {
                let default = Path::new(".env");
                if default.exists() {
                    read_env_file(default)?
                } else {
                    HashMap::new()
                }
            }
        };

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Build settings from a single lookup function. Split out of `load`
    /// so tests can drive it without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_key = lookup(PROJECT_KEY_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(PROJECT_KEY_VAR))?;
        validate_project_key(&project_key)?;

        let base_name = lookup(BASE_NAME_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_NAME.to_string());
        let host = lookup(HOST_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let environment = lookup(ENVIRONMENT_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: PORT_VAR,
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            project_key,
            base_name,
            host,
            port,
            environment,
        })
    }
}

/// Both halves of `{project_id}_{secret}` must be present and non-empty.
fn validate_project_key(key: &str) -> ConfigResult<()> {
    match key.split_once('_') {
        Some((project_id, secret)) if !project_id.is_empty() && !secret.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidProjectKey),
    }
}

/// Parse a `KEY=VALUE` env file. Blank lines and `#` comments are skipped;
/// values may carry one pair of surrounding quotes.
fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::EnvFile {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = unquote(value.trim());
            if !key.is_empty() {
                vars.insert(key.to_string(), value.to_string());
            }
        }
    }
    Ok(vars)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
