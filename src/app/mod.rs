//! Main application modules.
//!
//! This module provides URL normalization and shutdown handling used by the
//! server and the extraction pipeline.

pub mod shutdown;
pub mod url;

// Re-export public API
pub use shutdown::shutdown_signal;
pub use url::normalize_url;
