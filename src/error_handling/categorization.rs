//! Error categorization for log output.
//!
//! Callers only ever see the error message; the category is attached to the
//! log line so operators can tell DNS trouble from a changed page layout.

use super::types::ScrapeError;

/// Categorizes a `reqwest::Error` into a short label.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> &'static str {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            403 => "bot_detection",
            429 => "too_many_requests",
            _ if status.is_client_error() => "client_error_status",
            _ if status.is_server_error() => "server_error_status",
            _ => "unexpected_status",
        };
    }

    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_decode() {
        "decode"
    } else if error.is_body() {
        "body"
    } else if error.is_request() {
        "request"
    } else {
        "other"
    }
}

/// Label used when logging a failed operation.
pub fn error_category(error: &ScrapeError) -> &'static str {
    match error {
        ScrapeError::InvalidInput(_) => "invalid_input",
        ScrapeError::Fetch(e) => categorize_reqwest_error(e),
        ScrapeError::Timeout(_) => "timeout",
        ScrapeError::Browser(_) => "browser",
        ScrapeError::ResultsTableNotFound => "table_not_found",
        ScrapeError::NoDataRows => "no_data_rows",
        ScrapeError::Parse(_) => "parse",
    }
}
