//! Core error types

use thiserror::Error;

/// Core error type for the pattern catalogue
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[cfg(feature = "config-file")]
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A global tracing subscriber is already installed
    #[error("Logging already initialized: {0}")]
    LoggingInit(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
