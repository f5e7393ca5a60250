//! # Response Formatting
//!
//! Response types for the non-record endpoints. Record endpoints return the
//! stored documents themselves, unenveloped.

use serde::Serialize;

/// Status endpoint response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub msg: String,
    pub name: String,
    pub environment: String,
    pub version: String,
    /// Seconds since process start
    pub uptime: u64,
}

/// Confirmation message response (delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
