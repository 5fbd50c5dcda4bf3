//! HTTP client initialization.
//!
//! Both endpoints share one piece of configuration: the browser-identifying
//! User-Agent and the outbound timeout. The text extractor reuses a single
//! client for the life of the process; the blacklist checker opens a fresh
//! cookie-carrying session per request.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Outbound HTTP settings shared by every client the service builds.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// User-Agent header sent on every request
    pub user_agent: String,
    /// Bound on each outbound request
    pub timeout: Duration,
}

impl From<&Config> for HttpSettings {
    fn from(config: &Config) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Initializes the shared HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - Timeout from settings
/// - Redirect following enabled (reqwest default, up to 10 hops)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.clone())
        .build()
}

/// Initializes a client with its own cookie jar.
///
/// Every request built from the returned client shares the jar, so a
/// preference set by one call applies to the next. Dropping the client
/// discards the jar.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_session_client(settings: &HttpSettings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .cookie_store(true)
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.clone())
        .build()
}
