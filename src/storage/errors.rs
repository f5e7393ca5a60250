//! Storage collaborator error types

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by the storage collaborator.
///
/// These are never retried; the caller decides how they map onto the HTTP
/// surface.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested key does not exist
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The request to the hosted store could not be completed
    #[error("Storage request failed: {0}")]
    Request(String),

    /// The hosted store answered with a status we do not expect
    #[error("Unexpected storage response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// The hosted store answered with a body we cannot interpret
    #[error("Malformed storage response: {0}")]
    MalformedResponse(String),

    /// In-memory store lock was poisoned
    #[error("Lock poisoned")]
    LockPoisoned,
}
