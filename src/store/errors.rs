//! Error types for the store write path

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A required text field failed the minimum-length rule.
///
/// The rendered message is part of the API contract: the bracketed field
/// tag names the offending input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{field}] Value {value} is too short")]
pub struct ValidationError {
    /// Upper-cased field tag, e.g. `CODE_NAME`
    pub field: &'static str,
    /// The offending input value, verbatim
    pub value: String,
}

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Create rejected before any persistence
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Point lookup of an absent id
    #[error("Store not found")]
    NotFound,

    /// Either write step of an update was refused by the collaborator
    #[error("Invalid to update")]
    InvalidUpdate,

    /// Delete read-back still found the record
    #[error("Store {0} still present after delete")]
    UnexpectedState(String),

    /// Collaborator failure, propagated rather than retried
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored document no longer matches the record shape
    #[error("Malformed store document: {0}")]
    Document(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_field_tagged() {
        let err = ValidationError {
            field: "COUNTRY",
            value: "br".to_string(),
        };
        assert_eq!(err.to_string(), "[COUNTRY] Value br is too short");
    }

    #[test]
    fn test_invalid_update_message() {
        assert_eq!(StoreError::InvalidUpdate.to_string(), "Invalid to update");
    }

    #[test]
    fn test_validation_converts_into_store_error() {
        let err: StoreError = ValidationError {
            field: "CITY",
            value: "ny".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "[CITY] Value ny is too short");
    }
}
