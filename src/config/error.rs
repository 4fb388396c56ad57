//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),

    #[error("Catalog path must not be empty")]
    EmptyCatalogPath,

    #[error("Focus setting '{0}' must be greater than zero")]
    ZeroFocusDuration(&'static str),
}
