//! Status HTTP Route
//!
//! Reports API name, environment, version, and uptime.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};

use super::response::StatusResponse;

/// Status state shared across requests
pub struct StatusState {
    environment: String,
    started_at: Instant,
}

impl StatusState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }
}

/// Create the status route
pub fn status_routes(state: Arc<StatusState>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .with_state(state)
}

async fn status_handler(State(state): State<Arc<StatusState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        msg: "Current API status".to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs(),
    })
}
