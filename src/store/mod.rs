//! Store records and the validated write path
//!
//! The decision logic of the service lives here:
//!
//! - record shape (`record`)
//! - upper-casing normalization before persistence (`normalize`)
//! - minimum-length validation with field-tagged errors (`validate`)
//! - write orchestration and reads against the collaborator (`service`)
//!
//! Validation rejects before any persistence happens; normalization and
//! timestamp stamping happen between validation and the write.

mod errors;
mod normalize;
mod record;
mod service;
mod validate;

pub use errors::{StoreError, StoreResult, ValidationError};
pub use normalize::normalize;
pub use record::{StoreDraft, StoreRecord};
pub use service::{StoreService, FETCH_LIMIT};
pub use validate::{validate, SMALL_ALLOWED};
