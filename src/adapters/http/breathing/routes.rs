//! Axum router configuration for breathing endpoints.

use axum::{routing::get, Router};

use crate::adapters::websocket::live_session;

use super::handlers::{get_exercise, list_exercises, BreathingAppState};

/// Create the breathing API router.
///
/// # Routes
///
/// - `GET /exercises` - Exercise catalog summaries
/// - `GET /exercises/:slug` - Exercise detail
/// - `GET /exercises/:slug/live` - WebSocket running a guided session
pub fn breathing_routes() -> Router<BreathingAppState> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercises/:slug", get(get_exercise))
        .route("/exercises/:slug/live", get(live_session))
}

/// Breathing routes with their state applied, ready to nest under
/// `/api/breathing`.
pub fn breathing_router(state: BreathingAppState) -> Router {
    breathing_routes().with_state(state)
}
