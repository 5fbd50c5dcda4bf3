//! Application initialization and resource setup.
//!
//! Everything a handler needs is built here once, at startup, and handed to
//! the router as state:
//! - HTTP settings and clients
//! - The page source for text extraction
//! - The blacklist checker
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use log::info;

use crate::blacklist::BlacklistChecker;
use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::extract::{PageSource, TextExtractor};
use crate::server::AppState;

// Re-export public API
pub use client::{init_client, init_session_client, HttpSettings};
pub use logger::init_logger_with;

/// Builds the shared handler state from configuration.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the configured renderer is
/// not available in this build, or the blacklist base URL is unusable.
pub fn init_state(config: &Config) -> Result<AppState, InitializationError> {
    let settings = HttpSettings::from(config);

    let source = PageSource::new(config.renderer, &settings)?;
    info!(
        "Text extraction uses the {} renderer (timeout {}s)",
        source.name(),
        config.timeout_seconds
    );

    let checker = BlacklistChecker::new(settings, &config.blacklist_base_url)?;
    info!("Blacklist checks go to {}", checker.base_url());

    Ok(AppState::new(TextExtractor::new(source), checker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_state_with_defaults() {
        assert!(init_state(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_state_rejects_bad_blacklist_url() {
        let config = Config {
            blacklist_base_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = init_state(&config).err().expect("startup should fail");
        assert!(matches!(err, InitializationError::BlacklistUrlError { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
