//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every flag can also be supplied through an environment
//! variable (or a `.env` file loaded at startup).

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BLACKLIST_BASE_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How `/extract` obtains a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Renderer {
    /// Plain HTTP GET parsed with `scraper`
    Static,
    /// Headless Chromium navigation (requires the `browser` feature)
    Browser,
}

/// Service configuration.
///
/// Parsed from the command line by the binary; library users can build it
/// directly and fill the rest from `Default`.
///
/// # Examples
///
/// ```no_run
/// use text_scout::Config;
///
/// let config = Config {
///     port: 8080,
///     timeout_seconds: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "text_scout", version, about)]
pub struct Config {
    /// Address to bind the API server to
    #[arg(long, env = "TEXT_SCOUT_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the API server to
    #[arg(long, env = "TEXT_SCOUT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, env = "TEXT_SCOUT_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "TEXT_SCOUT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Timeout for every outbound request and browser navigation, in seconds
    #[arg(long, env = "TEXT_SCOUT_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, env = "TEXT_SCOUT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Page renderer used by /extract
    ///
    /// `browser` renders JavaScript-heavy pages in headless Chromium (needs the
    /// `browser` feature). `static` is the fallback path for pages that do not
    /// need JavaScript and is the default because it has no external runtime.
    #[arg(long, env = "TEXT_SCOUT_RENDERER", value_enum, default_value_t = Renderer::Static)]
    pub renderer: Renderer,

    /// Root URL of the blacklist checking site
    #[arg(long, env = "TEXT_SCOUT_BLACKLIST_URL", default_value = DEFAULT_BLACKLIST_BASE_URL)]
    pub blacklist_base_url: String,
}

impl Config {
    /// Outbound timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            renderer: Renderer::Static,
            blacklist_base_url: DEFAULT_BLACKLIST_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let parsed = Config::parse_from(["text_scout"]);
        let default = Config::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
        assert_eq!(parsed.user_agent, default.user_agent);
        assert_eq!(parsed.renderer, default.renderer);
        assert_eq!(parsed.blacklist_base_url, default.blacklist_base_url);
        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(parsed.log_format, default.log_format);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::parse_from([
            "text_scout",
            "--port",
            "8081",
            "--renderer",
            "browser",
            "--timeout-seconds",
            "10",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.port, 8081);
        assert_eq!(config.renderer, Renderer::Browser);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
