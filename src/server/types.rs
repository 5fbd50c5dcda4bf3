//! API server data structures.

use std::sync::Arc;

use serde::Serialize;

use crate::blacklist::BlacklistChecker;
use crate::extract::TextExtractor;

/// Shared state for the API handlers.
///
/// Built once at startup; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// Pipeline behind `/extract`
    pub extractor: Arc<TextExtractor>,
    /// Pipeline behind `/check-ips`
    pub checker: Arc<BlacklistChecker>,
}

impl AppState {
    /// Wraps the two pipelines for sharing across handlers.
    pub fn new(extractor: TextExtractor, checker: BlacklistChecker) -> Self {
        Self {
            extractor: Arc::new(extractor),
            checker: Arc::new(checker),
        }
    }
}

/// JSON response for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process can answer
    pub status: &'static str,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
}

/// JSON response for `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    pub message: &'static str,
    pub description: &'static str,
    pub endpoints: EndpointList,
    pub note: &'static str,
}

/// Route to one-line usage summary.
#[derive(Debug, Serialize)]
pub struct EndpointList {
    #[serde(rename = "/extract")]
    pub extract: &'static str,
    #[serde(rename = "/check-ips")]
    pub check_ips: &'static str,
    #[serde(rename = "/health")]
    pub health: &'static str,
}

/// The static body served at `/`.
pub const SERVICE_DESCRIPTION: ServiceDescription = ServiceDescription {
    message: "Welcome to the API Service",
    description: "This service provides text extraction and IP blacklist checking functionality",
    endpoints: EndpointList {
        extract: "POST - Extract text from a URL",
        check_ips: "POST - Check IPs against blacklists (with colorblind mode support)",
        health: "GET - Service health check",
    },
    note: "The IP checking functionality uses bulkblacklist.com",
};
