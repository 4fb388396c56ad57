//! Exercise catalog port (read side).
//!
//! Defines where breathing exercises come from. The server reads from it to
//! list exercises and to resolve the slug in a live-session URL.
//!
//! # Example
//!
//! ```ignore
//! async fn session_for(
//!     catalog: &dyn ExerciseCatalog,
//!     slug: &ExerciseSlug,
//! ) -> Result<Option<u32>, DomainError> {
//!     let exercise = catalog.find_by_slug(slug).await?;
//!     Ok(exercise.map(|e| e.total_cycles()))
//! }
//! ```

use async_trait::async_trait;

use crate::domain::breathing::{Exercise, ExerciseSlug};
use crate::domain::foundation::DomainError;

/// Reader port for breathing exercises.
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// All exercises in display order.
    async fn list(&self) -> Result<Vec<Exercise>, DomainError>;

    /// Look up one exercise.
    ///
    /// Returns `None` if no exercise has this slug.
    async fn find_by_slug(&self, slug: &ExerciseSlug) -> Result<Option<Exercise>, DomainError>;
}
