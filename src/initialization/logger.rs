//! Logger initialization.
//!
//! `env_logger` with two output shapes: a colored line for terminals and a
//! one-object-per-line JSON form for log collectors.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Dependencies whose debug output drowns the service's own lines.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("cookie_store", LevelFilter::Warn),
    ("chromiumoxide", LevelFilter::Warn),
    ("tungstenite", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Initializes the logger with the specified level and format.
///
/// The logger reads `RUST_LOG` first, then the provided `level` overrides it
/// for this crate. Noisy dependencies are capped regardless.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug text_scout
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=text_scout=debug,reqwest=info text_scout --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, (*cap).min(level));
    }
    builder.filter_module("text_scout", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Renders one structured log line.
fn json_line(ts_millis: i64, level: log::Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": message,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_is_valid_json() {
        let line = json_line(42, log::Level::Warn, "text_scout::blacklist", "said \"hi\"");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["target"], "text_scout::blacklist");
        assert_eq!(parsed["msg"], "said \"hi\"");
    }

    #[test]
    fn test_second_init_reports_error_instead_of_panicking() {
        // env_logger can only be installed once per process
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
