//! Breathing handlers.
//!
//! ## Queries
//! - List the exercise catalog
//! - Resolve one exercise by slug

mod get_exercise;
mod list_exercises;

pub use get_exercise::{GetExerciseHandler, GetExerciseQuery, GetExerciseResult};
pub use list_exercises::{ListExercisesHandler, ListExercisesQuery, ListExercisesResult};
