//! ListExercisesHandler - Query handler for the exercise catalog.

use std::sync::Arc;

use crate::domain::breathing::Exercise;
use crate::domain::foundation::DomainError;
use crate::ports::ExerciseCatalog;

/// Query to list every breathing exercise.
#[derive(Debug, Clone, Default)]
pub struct ListExercisesQuery;

/// Exercises in display order.
pub type ListExercisesResult = Vec<Exercise>;

/// Handler for listing breathing exercises.
pub struct ListExercisesHandler {
    catalog: Arc<dyn ExerciseCatalog>,
}

impl ListExercisesHandler {
    pub fn new(catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListExercisesQuery) -> Result<ListExercisesResult, DomainError> {
        self.catalog.list().await
    }
}
