//! Error types for roster-guard

use thiserror::Error;

/// Result type alias for roster-guard
pub type Result<T> = std::result::Result<T, GuardError>;

/// Main error type for roster-guard
///
/// The RBAC engine itself never returns this type; denials are plain values.
/// It covers the fallible edges around the engine: configuration loading,
/// profile storage and the role-change workflow.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Insufficient privilege
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Profile store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
