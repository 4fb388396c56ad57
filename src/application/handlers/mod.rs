//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod breathing;

pub use breathing::{
    GetExerciseHandler, GetExerciseQuery, GetExerciseResult, ListExercisesHandler,
    ListExercisesQuery, ListExercisesResult,
};
