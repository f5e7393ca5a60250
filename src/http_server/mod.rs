//! # HTTP Server
//!
//! Axum surface for stores-api: status endpoint plus store CRUD routes,
//! versioned under `/api/v1`.

mod config;
mod errors;
mod response;
mod server;
mod status_routes;
mod store_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use response::{MessageResponse, StatusResponse};
pub use server::HttpServer;
pub use status_routes::{status_routes, StatusState};
pub use store_routes::{store_routes, StoreState};
