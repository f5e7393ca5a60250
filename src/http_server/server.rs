//! # HTTP Server
//!
//! Main HTTP server combining the status and store routers under `/api/v1`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::storage::DocumentStore;

use super::config::HttpServerConfig;
use super::status_routes::{status_routes, StatusState};
use super::store_routes::{store_routes, StoreState};

/// HTTP server for the stores API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over one storage collaborator instance.
    pub fn new<S: DocumentStore + 'static>(
        config: HttpServerConfig,
        base: Arc<S>,
        environment: impl Into<String>,
    ) -> Self {
        let router = Self::build_router(&config, base, environment.into());
        Self { config, router }
    }

    /// Build the combined router
    fn build_router<S: DocumentStore + 'static>(
        config: &HttpServerConfig,
        base: Arc<S>,
        environment: String,
    ) -> Router {
        let store_state = Arc::new(StoreState::new(base));
        let status_state = Arc::new(StatusState::new(environment));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .nest(
                "/api/v1",
                status_routes(status_state).merge(store_routes(store_state)),
            )
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::info("server_started", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
