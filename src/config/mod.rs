//! Configuration management for roster-guard
//!
//! This module handles loading, validation and access to the role table and
//! logging configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::rbac::RbacSystem;
use crate::utils::error::{GuardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub guard: GuardConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GuardError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let guard: GuardConfig = serde_yaml::from_str(content)
            .map_err(|e| GuardError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { guard };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables over defaults
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load configuration from `lookup` over defaults
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Loading configuration from environment variables");

        let guard = GuardConfig::default().apply_env_with(lookup)?;
        let config = Self { guard };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment alone;
    /// environment overrides apply on top of the file.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::from_env();
        };

        let config = Self {
            guard: Self::from_file(path).await?.guard.apply_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.guard.rbac
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.guard.logging
    }

    /// Build the RBAC system described by this configuration
    pub fn build_rbac(&self) -> Result<RbacSystem> {
        RbacSystem::from_config(&self.guard.rbac)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.guard
            .rbac
            .validate()
            .map_err(|e| GuardError::config(format!("RBAC config error: {}", e)))?;

        self.guard
            .logging
            .validate()
            .map_err(|e| GuardError::config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.guard = self.guard.merge(other.guard);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.guard)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.guard)
            .map_err(|e| GuardError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
