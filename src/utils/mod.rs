//! Shared helpers.
//!
//! This module provides:
//! - CSS selector compilation with a safe fallback
//! - Elapsed-time helpers for `processing_time`

mod selector;
mod timing;

pub use selector::compile_selector;
pub use timing::elapsed_secs;
