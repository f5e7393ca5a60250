//! Store HTTP Routes
//!
//! CRUD endpoints for store records. Handlers translate between the HTTP
//! surface and the store service; all decision logic lives in the service.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::storage::DocumentStore;
use crate::store::{StoreDraft, StoreRecord, StoreService};

use super::errors::ApiError;
use super::response::MessageResponse;

/// Store state shared across handlers
pub struct StoreState<S: DocumentStore> {
    pub service: StoreService<S>,
}

impl<S: DocumentStore> StoreState<S> {
    pub fn new(base: Arc<S>) -> Self {
        Self {
            service: StoreService::new(base),
        }
    }
}

/// Create store routes
pub fn store_routes<S: DocumentStore + 'static>(state: Arc<StoreState<S>>) -> Router {
    Router::new()
        .route("/stores", get(list_stores_handler))
        .route("/stores", post(create_store_handler))
        .route("/stores-by-country", get(stores_by_country_handler))
        .route("/stores/{id}", get(get_store_handler))
        .route("/stores/{id}", put(update_store_handler))
        .route("/stores/{id}", delete(delete_store_handler))
        .with_state(state)
}

/// Shared state type
type ServerState<S> = Arc<StoreState<S>>;

/// List all stores (fixed page size, no cursor)
async fn list_stores_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
) -> Result<Json<Vec<StoreRecord>>, ApiError> {
    let records = state.service.get_all().await?;
    Ok(Json(records))
}

/// Equality filter on country
async fn stores_by_country_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<StoreRecord>>, ApiError> {
    let country = query
        .get("country")
        .ok_or(ApiError::MissingParam("country"))?;

    let records = state.service.get_by_country(country).await?;
    Ok(Json(records))
}

/// Point lookup
async fn get_store_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<StoreRecord>, ApiError> {
    let record = state.service.get_by_id(&id).await?;
    Ok(Json(record))
}

/// Create a store record
async fn create_store_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<StoreRecord>), ApiError> {
    // Shape errors are a generic bad request; field-length rules are the
    // validator's and produce the field-tagged message.
    let draft: StoreDraft =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let record = state.service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Merge a partial update, returning the final stored record
async fn update_store_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<StoreRecord>, ApiError> {
    if !patch.is_object() {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    }

    let record = state.service.update(&id, patch).await?;
    Ok(Json(record))
}

/// Delete a store record, confirming by read-back
async fn delete_store_handler<S: DocumentStore + 'static>(
    State(state): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let msg = state.service.delete(&id).await?;
    Ok(Json(MessageResponse::new(msg)))
}
