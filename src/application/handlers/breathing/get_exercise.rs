//! GetExerciseHandler - Query handler for a single exercise.

use std::sync::Arc;

use crate::domain::breathing::{Exercise, ExerciseSlug};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ExerciseCatalog;

/// Query to fetch one exercise by slug.
#[derive(Debug, Clone)]
pub struct GetExerciseQuery {
    pub slug: ExerciseSlug,
}

pub type GetExerciseResult = Exercise;

/// Handler for resolving an exercise slug.
///
/// An unknown slug is an `ExerciseNotFound` error rather than `None`, since
/// every caller (detail page, live session) needs the exercise to proceed.
pub struct GetExerciseHandler {
    catalog: Arc<dyn ExerciseCatalog>,
}

impl GetExerciseHandler {
    pub fn new(catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetExerciseQuery) -> Result<GetExerciseResult, DomainError> {
        self.catalog
            .find_by_slug(&query.slug)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ExerciseNotFound,
                    format!("No exercise named '{}'", query.slug),
                )
                .with_detail("slug", query.slug.to_string())
            })
    }
}
