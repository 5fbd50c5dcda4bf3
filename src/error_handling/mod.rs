//! Error handling.
//!
//! This module provides:
//! - Error type definitions (startup and request-scoped)
//! - The mapping from error kind to HTTP status
//! - Error categorization for log output
//!
//! Request-scoped failures fall into three kinds:
//! - **InvalidInput**: rejected before any outbound call (400)
//! - **Fetch**: the remote site could not be reached or answered non-2xx (500)
//! - **Parse**: the remote page did not have the expected shape (500)

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_category};
pub use types::{ErrorKind, InitializationError, ScrapeError};
