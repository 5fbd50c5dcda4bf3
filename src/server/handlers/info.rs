//! Static service description and health check.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use super::super::types::{HealthResponse, ServiceDescription, SERVICE_DESCRIPTION};

/// `GET /`
pub async fn home_handler() -> Json<ServiceDescription> {
    Json(SERVICE_DESCRIPTION)
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
