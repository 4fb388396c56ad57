//! In-memory exercise catalog.

use async_trait::async_trait;

use crate::domain::breathing::{Exercise, ExerciseSlug, BUILTIN_EXERCISES};
use crate::domain::foundation::DomainError;
use crate::ports::ExerciseCatalog;

/// Catalog backed by a fixed list of exercises.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl InMemoryExerciseCatalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// The exercises shipped with the application.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_EXERCISES.clone())
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[async_trait]
impl ExerciseCatalog for InMemoryExerciseCatalog {
    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        Ok(self.exercises.clone())
    }

    async fn find_by_slug(&self, slug: &ExerciseSlug) -> Result<Option<Exercise>, DomainError> {
        Ok(self.exercises.iter().find(|e| e.slug() == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builtin_lists_all_exercises_in_order() {
        let catalog = InMemoryExerciseCatalog::builtin();
        let slugs: Vec<_> = catalog
            .list()
            .await
            .unwrap()
            .iter()
            .map(|e| e.slug().to_string())
            .collect();
        assert_eq!(
            slugs,
            vec![
                "box-breathing",
                "4-7-8-breathing",
                "diaphragmatic-breathing",
                "alternate-nostril-breathing",
                "pursed-lip-breathing",
            ]
        );
    }

    #[tokio::test]
    async fn find_by_slug_returns_matching_exercise() {
        let catalog = InMemoryExerciseCatalog::builtin();
        let slug = ExerciseSlug::new("diaphragmatic-breathing").unwrap();

        let exercise = catalog.find_by_slug(&slug).await.unwrap().unwrap();

        assert_eq!(exercise.duration_minutes(), 7);
        assert_eq!(exercise.cycle().cycle_seconds(), 10);
    }

    #[tokio::test]
    async fn find_by_unknown_slug_returns_none() {
        let catalog = InMemoryExerciseCatalog::builtin();
        let slug = ExerciseSlug::new("lion-breath").unwrap();
        assert!(catalog.find_by_slug(&slug).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let catalog = InMemoryExerciseCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.list().await.unwrap().is_empty());
    }
}
