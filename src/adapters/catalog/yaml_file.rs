//! YAML file exercise catalog.
//!
//! Reads a list of exercises from one YAML document at startup:
//!
//! ```yaml
//! - slug: box-breathing
//!   name_key: boxBreathing
//!   duration_minutes: 5
//!   cycle:
//!     - { state: inhale, duration_seconds: 4 }
//!     - { state: hold_after_inhale, duration_seconds: 4 }
//!     - { state: exhale, duration_seconds: 4 }
//!     - { state: hold_after_exhale, duration_seconds: 4 }
//! ```
//!
//! Each entry goes through the same validation as a hand-built exercise, so
//! an empty cycle or a zero-second phase fails the load.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::breathing::{Exercise, ExerciseSlug};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ExerciseCatalog;

use super::InMemoryExerciseCatalog;

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Duplicate exercise slug '{0}'")]
    DuplicateSlug(ExerciseSlug),

    #[error("Catalog file contains no exercises")]
    Empty,
}

impl From<CatalogLoadError> for DomainError {
    fn from(err: CatalogLoadError) -> Self {
        DomainError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

/// Exercise catalog loaded from a YAML file.
#[derive(Debug, Clone)]
pub struct YamlExerciseCatalog {
    source: PathBuf,
    inner: InMemoryExerciseCatalog,
}

impl YamlExerciseCatalog {
    /// Reads and validates the catalog at `path`.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref().to_path_buf();
        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: path.clone(),
                source,
            })?;

        let exercises = Self::parse(&path, &yaml)?;
        tracing::info!(path = %path.display(), exercises = exercises.len(), "exercise catalog loaded");

        Ok(Self {
            source: path,
            inner: InMemoryExerciseCatalog::new(exercises),
        })
    }

    fn parse(path: &Path, yaml: &str) -> Result<Vec<Exercise>, CatalogLoadError> {
        let exercises: Vec<Exercise> =
            serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if exercises.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let mut seen = HashSet::new();
        for exercise in &exercises {
            if !seen.insert(exercise.slug()) {
                return Err(CatalogLoadError::DuplicateSlug(exercise.slug().clone()));
            }
        }
        Ok(exercises)
    }

    /// File the catalog was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[async_trait]
impl ExerciseCatalog for YamlExerciseCatalog {
    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        self.inner.list().await
    }

    async fn find_by_slug(&self, slug: &ExerciseSlug) -> Result<Option<Exercise>, DomainError> {
        self.inner.find_by_slug(slug).await
    }
}
