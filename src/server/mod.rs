//! HTTP API server.
//!
//! Provides four endpoints:
//! - `GET /` - static service description
//! - `GET /health` - liveness check
//! - `POST /extract` - visible text of a URL
//! - `POST /check-ips` - blacklist status of a batch of IPs
//!
//! Each request runs its outbound work to completion (or timeout) on its own
//! task; handlers share nothing mutable.

mod handlers;
mod types;
mod validation;

use axum::routing::{get, post};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

use crate::app::shutdown_signal;
use crate::error_handling::InitializationError;

use handlers::{check_ips_handler, extract_handler, health_handler, home_handler};
pub use types::{AppState, HealthResponse, ServiceDescription, SERVICE_DESCRIPTION};
pub use validation::{check_request, requested_url};

/// Builds the router with CORS open to any origin.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/extract", post(extract_handler))
        .route("/check-ips", post(check_ips_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `address` and serves until a shutdown signal arrives.
///
/// # Errors
///
/// Returns `InitializationError::BindError` if the address cannot be bound,
/// or the I/O error that stopped the server.
pub async fn start_server(address: &str, state: AppState) -> Result<(), anyhow::Error> {
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| InitializationError::BindError {
            address: address.to_string(),
            source,
        })?;

    info!("API server listening on http://{}/", address);
    info!("  - Extract: POST http://{}/extract", address);
    info!("  - Check IPs: POST http://{}/check-ips", address);
    info!("  - Health: GET http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
