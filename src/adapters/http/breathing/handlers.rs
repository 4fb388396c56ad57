//! HTTP handlers for breathing endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::breathing::{
    GetExerciseHandler, GetExerciseQuery, ListExercisesHandler, ListExercisesQuery,
};
use crate::domain::breathing::ExerciseSlug;
use crate::ports::ExerciseCatalog;

use super::dto::{ExerciseDetailResponse, ExerciseListResponse, ExerciseSummaryResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for breathing routes, including the live session socket.
#[derive(Clone)]
pub struct BreathingAppState {
    pub catalog: Arc<dyn ExerciseCatalog>,
    live_sessions: Arc<AtomicUsize>,
}

impl BreathingAppState {
    pub fn new(catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self {
            catalog,
            live_sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Guided sessions currently attached to a socket.
    pub fn live_sessions(&self) -> usize {
        self.live_sessions.load(Ordering::SeqCst)
    }

    /// Counts one live session until the returned guard is dropped.
    pub(crate) fn track_live_session(&self) -> LiveSessionGuard {
        self.live_sessions.fetch_add(1, Ordering::SeqCst);
        LiveSessionGuard(self.live_sessions.clone())
    }

    pub fn list_exercises_handler(&self) -> ListExercisesHandler {
        ListExercisesHandler::new(self.catalog.clone())
    }

    pub fn get_exercise_handler(&self) -> GetExerciseHandler {
        GetExerciseHandler::new(self.catalog.clone())
    }
}

/// Decrements the live-session count on drop.
#[derive(Debug)]
pub(crate) struct LiveSessionGuard(Arc<AtomicUsize>);

impl Drop for LiveSessionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/breathing/exercises - List the exercise catalog
pub async fn list_exercises(
    State(state): State<BreathingAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let exercises = state.list_exercises_handler().handle(ListExercisesQuery).await?;

    let response = ExerciseListResponse {
        exercises: exercises.iter().map(ExerciseSummaryResponse::from).collect(),
    };
    Ok(Json(response))
}

/// GET /api/breathing/exercises/:slug - Exercise detail with phases and steps
pub async fn get_exercise(
    State(state): State<BreathingAppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetExerciseQuery {
        slug: ExerciseSlug::new(slug)?,
    };
    let exercise = state.get_exercise_handler().handle(query).await?;

    Ok(Json(ExerciseDetailResponse::from(&exercise)))
}
