//! Configuration error types
//!
//! All configuration errors are fatal at startup.

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent from environment and env file
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The project key does not look like `{project_id}_{secret}`
    #[error("Invalid project key: expected '{{project_id}}_{{secret}}' format")]
    InvalidProjectKey,

    /// A variable is present but cannot be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    /// The env file could not be read
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_names_the_variable() {
        let err = ConfigError::MissingVar("DETA_PROJECT_KEY");
        assert!(err.to_string().contains("DETA_PROJECT_KEY"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            name: "STORES_PORT",
            value: "eighty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for STORES_PORT: eighty");
    }
}
