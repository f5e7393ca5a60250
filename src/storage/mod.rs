//! Storage collaborator for stores-api
//!
//! The hosted database is treated as an opaque key-value document store
//! reached through a thin client. One collaborator instance is constructed
//! at startup and injected into the HTTP layer; consistency is entirely the
//! collaborator's concern.
//!
//! Two implementations of the `DocumentStore` seam:
//!
//! - `DetaBase`: HTTP client for the hosted Deta Base item API
//! - `MemoryBase`: in-memory store for tests

mod base;
mod deta;
mod errors;
mod memory;

pub use base::DocumentStore;
pub use deta::DetaBase;
pub use errors::{StorageError, StorageResult};
pub use memory::MemoryBase;
