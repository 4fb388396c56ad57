//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WARMNEST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use warmnest::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod catalog;
mod error;
mod focus;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use focus::FocusConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development server on the built-in catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Exercise catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Pomodoro and two-minute timer durations
    #[serde(default)]
    pub focus: FocusConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WARMNEST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WARMNEST__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `WARMNEST__CATALOG__PATH=./exercises.yaml` -> `catalog.path = ...`
    /// - `WARMNEST__FOCUS__WORK_SECONDS=1800` -> `focus.work_seconds = 1800`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WARMNEST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalog.validate()?;
        self.focus.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
