//! text_scout library: page text extraction and IP blacklist checking
//!
//! This library provides the pieces behind a small JSON API:
//! - [`extract`]: fetch a URL and return its visible text and word count
//! - [`blacklist`]: submit IPs to a bulk blacklist site and parse its results table
//! - [`server`]: the axum router exposing both
//!
//! # Example
//!
//! ```no_run
//! use text_scout::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod blacklist;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod server;
mod utils;

// Re-export public API
pub use app::normalize_url;
pub use config::{Config, LogFormat, LogLevel, Renderer};
pub use error_handling::{ErrorKind, ScrapeError};
pub use run::run_server;

// Internal run module (wires configuration to the running server)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::initialization::init_state;
    use crate::server::start_server;

    /// Builds shared state from `config` and serves the API until shutdown.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client or renderer cannot be initialized
    /// - The listen address cannot be bound
    pub async fn run_server(config: Config) -> Result<()> {
        let state = init_state(&config).context("Failed to initialize service state")?;

        info!("Starting text_scout {}", env!("CARGO_PKG_VERSION"));
        start_server(&config.bind_address(), state).await?;

        info!("Server stopped");
        Ok(())
    }
}
