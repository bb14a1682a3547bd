//! Logging setup
//!
//! Installs the global `tracing` subscriber from the `logging` config section.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{GuardError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter for a logging config.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| GuardError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| GuardError::internal(format!("Failed to install logger: {}", e)))
}
