//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default endpoints, element lists)
//! - Outbound HTTP header names
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Renderer};
