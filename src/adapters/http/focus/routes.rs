//! Axum router configuration for focus endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_focus_settings, FocusAppState};

/// Create the focus API router.
///
/// # Routes
///
/// - `GET /settings` - Timer durations
pub fn focus_routes() -> Router<FocusAppState> {
    Router::new().route("/settings", get(get_focus_settings))
}

/// Focus routes with their state applied, ready to nest under `/api/focus`.
pub fn focus_router(state: FocusAppState) -> Router {
    focus_routes().with_state(state)
}
