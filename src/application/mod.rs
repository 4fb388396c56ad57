//! Application layer - Queries, Handlers, and the guided-session runtime.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod guided_session;
pub mod handlers;

pub use guided_session::{GuidedSession, SessionCommand};
pub use handlers::{
    GetExerciseHandler, GetExerciseQuery, GetExerciseResult, ListExercisesHandler,
    ListExercisesQuery, ListExercisesResult,
};
