//! The `DocumentStore` seam
//!
//! Modeled on the hosted Deta Base item API: put assigns an opaque key when
//! the item carries none, update merges fields into an existing item, fetch
//! runs an equality query. Documents are plain JSON objects; the schema
//! lives one layer up.

use async_trait::async_trait;
use serde_json::Value;

use super::errors::StorageResult;

/// Key-value document store operations.
///
/// Implementations must be shareable across request handlers; a single
/// instance lives for the whole process.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store an item. If the item has no `key` field, the store assigns an
    /// opaque key. Returns the item as stored, key included.
    async fn put(&self, item: Value) -> StorageResult<Value>;

    /// Point lookup. Returns `None` for an absent key rather than an error.
    async fn get(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Merge the fields of `patch` into the existing item under `key`.
    /// Fails with `KeyNotFound` if the item does not exist.
    async fn update(&self, key: &str, patch: Value) -> StorageResult<()>;

    /// Delete the item under `key`. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Fetch items matching an equality query object (all fields must
    /// match), or all items when `query` is `None`, up to `limit`.
    async fn fetch(&self, query: Option<Value>, limit: usize) -> StorageResult<Vec<Value>>;
}
