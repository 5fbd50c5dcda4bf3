//! Error type definitions.
//!
//! `InitializationError` covers process startup. `ScrapeError` is the failure
//! side of every request-scoped operation; handlers map it to an HTTP status
//! through [`ErrorKind`].

use std::time::Duration;

use axum::http::StatusCode;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The selected renderer cannot run in this build or environment.
    #[error("Renderer initialization error: {0}")]
    RendererError(String),

    /// The configured blacklist site root cannot be used as a base URL.
    #[error("Invalid blacklist base URL '{url}': {reason}")]
    BlacklistUrlError {
        /// Value as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Error binding the API listener.
    #[error("Failed to bind API server to {address}: {source}")]
    BindError {
        /// Address that could not be bound
        address: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`ScrapeError`].
///
/// Outbound failures are not split into transient and permanent: the caller
/// only ever sees a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ErrorKind {
    /// Malformed request fields; no outbound call was attempted
    #[strum(serialize = "invalid_input")]
    InvalidInput,
    /// Timeout, DNS, connection or non-2xx status from a remote site
    #[strum(serialize = "fetch")]
    Fetch,
    /// The remote page did not have the expected shape
    #[strum(serialize = "parse")]
    Parse,
}

impl ErrorKind {
    /// HTTP status the API answers with for this kind of failure.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Fetch | ErrorKind::Parse => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure of a text extraction or blacklist check.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A request field was missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// The outbound HTTP request failed (connection, DNS, status, body).
    #[error("{0}")]
    Fetch(#[from] ReqwestError),

    /// The outbound operation did not finish in time.
    #[error("Timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// Headless browser launch, navigation or evaluation failed.
    #[error("Browser error: {0}")]
    Browser(String),

    /// The blacklist response had no `table.table` element.
    #[error("Results table not found")]
    ResultsTableNotFound,

    /// The blacklist results table had a header but no data rows.
    #[error("No data rows found")]
    NoDataRows,

    /// Any other mismatch between the page and what the parser expects.
    #[error("{0}")]
    Parse(String),
}

impl ScrapeError {
    /// Classifies the error for status-code mapping and logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::InvalidInput(_) => ErrorKind::InvalidInput,
            ScrapeError::Fetch(_) | ScrapeError::Timeout(_) | ScrapeError::Browser(_) => {
                ErrorKind::Fetch
            }
            ScrapeError::ResultsTableNotFound | ScrapeError::NoDataRows | ScrapeError::Parse(_) => {
                ErrorKind::Parse
            }
        }
    }

    /// Shorthand for `self.kind().status_code()`.
    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }
}
