//! Text extraction handler.

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
use super::super::validation::requested_url;
use crate::error_handling::error_category;
use crate::extract::ExtractionResult;
use crate::utils::elapsed_secs;

/// `POST /extract` with body `{"url": "..."}`
pub async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    let outcome = match requested_url(payload) {
        Ok(url) => {
            info!("Extraction requested for {url}");
            state.extractor.extract_text(&url).await
        }
        Err(e) => Err(e),
    };

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            error!("Extraction failed [{}]: {e}", error_category(e));
            e.status_code()
        }
    };

    (status, Json(ExtractionResult::from_outcome(&outcome, elapsed_secs(start)))).into_response()
}
