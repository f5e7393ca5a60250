//! Observability for stores-api
//!
//! Structured JSON logging. One log line = one event, deterministic key
//! ordering, explicit severity levels.

mod logger;

pub use logger::{Logger, Severity};
