//! HTTP adapter for focus timer endpoints.
//!
//! - `GET /api/focus/settings` - Pomodoro and two-minute durations

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::FocusAppState;
pub use routes::{focus_router, focus_routes};
