//! Blacklist check handler.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use serde_json::Value;

use super::super::types::AppState;
use super::super::validation::check_request;
use crate::blacklist::IpCheckResult;
use crate::error_handling::error_category;
use crate::utils::elapsed_secs;

/// `POST /check-ips` with body `{"ips": [...], "colorblind_mode": bool}`
///
/// Invalid bodies are answered with 400 before anything is sent to the
/// blacklist site.
pub async fn check_ips_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    let request = match check_request(payload) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejected /check-ips request: {e}");
            let body = IpCheckResult::error(e.to_string(), elapsed_secs(start));
            return (e.status_code(), Json(body)).into_response();
        }
    };

    info!(
        "Blacklist check requested for {} IPs (colorblind_mode={})",
        request.ips.len(),
        request.colorblind_mode
    );

    match state
        .checker
        .check_ips(&request.ips, request.colorblind_mode)
        .await
    {
        Ok(records) => {
            let body = IpCheckResult::success(records, request.colorblind_mode, elapsed_secs(start));
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!("Error processing IPs [{}]: {e}", error_category(&e));
            let body = IpCheckResult::error(e.to_string(), elapsed_secs(start));
            (e.status_code(), Json(body)).into_response()
        }
    }
}
