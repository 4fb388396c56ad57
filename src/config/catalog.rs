//! Exercise catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where breathing exercises are loaded from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in exercises are served when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}
