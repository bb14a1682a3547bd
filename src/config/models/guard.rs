//! Top-level configuration document

use super::{LogFormat, LoggingConfig, RbacConfig};
use crate::utils::error::{GuardError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROSTER_GUARD";

/// Configuration document as read from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub rbac: RbacConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GuardConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    ///
    /// Recognized keys: `ROSTER_GUARD_LOG_LEVEL`, `ROSTER_GUARD_LOG_FORMAT`
    /// (`text` or `json`) and `ROSTER_GUARD_LOG_TARGET` (`true`/`false`).
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(level) = lookup(&format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(&format!("{}_LOG_FORMAT", ENV_PREFIX)) {
            self.logging.format = match format.to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(GuardError::config(format!("Invalid log format: {}", other)));
                }
            };
        }
        if let Some(with_target) = lookup(&format!("{}_LOG_TARGET", ENV_PREFIX)) {
            self.logging.with_target = with_target
                .parse()
                .map_err(|e| GuardError::config(format!("Invalid log target flag: {}", e)))?;
        }

        Ok(self)
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        if other.logging != LoggingConfig::default() {
            self.logging = other.logging;
        }
        self
    }
}
