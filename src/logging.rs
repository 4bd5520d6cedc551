use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;
    Ok(())
}

/// Builds the filter from `RUST_LOG`-style directives, or from the configured
/// `level` when no directives are given.
pub fn build_filter(directives: Option<&str>, level: &str) -> Result<EnvFilter> {
    match directives.filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            Error::config(format!("Invalid RUST_LOG directives '{}': {}", directives, e))
        }),
        None => {
            validate_log_level(level)?;
            Ok(EnvFilter::new(level))
        }
    }
}

/// Installs the JSON subscriber on stderr.
///
/// Stdout is left alone because the stdio MCP transport owns it.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();
}
