//! HTTP adapter for breathing endpoints.
//!
//! Exposes the exercise catalog and live sessions:
//! - `GET /api/breathing/exercises` - List exercises
//! - `GET /api/breathing/exercises/:slug` - Get one exercise
//! - `GET /api/breathing/exercises/:slug/live` - Guided session over WebSocket

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::BreathingAppState;
pub use routes::{breathing_router, breathing_routes};
