//! Exercise catalog adapters.
//!
//! - **InMemoryExerciseCatalog** - Fixed list, usually the built-in exercises
//! - **YamlExerciseCatalog** - Exercises read from a YAML file at startup
//!
//! ```ignore
//! let catalog: Arc<dyn ExerciseCatalog> = match &config.catalog.path {
//!     Some(path) => Arc::new(YamlExerciseCatalog::load(path).await?),
//!     None => Arc::new(InMemoryExerciseCatalog::builtin()),
//! };
//! ```

mod in_memory;
mod yaml_file;

pub use in_memory::InMemoryExerciseCatalog;
pub use yaml_file::{CatalogLoadError, YamlExerciseCatalog};
