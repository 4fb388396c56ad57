//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] assembles them behind the shared middleware stack.

pub mod breathing;
pub mod error;
pub mod focus;
pub mod health;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use breathing::{breathing_router, BreathingAppState};
pub use error::{ApiError, ErrorResponse};
pub use focus::{focus_router, FocusAppState};
pub use health::{health_router, HealthState};

/// Builds the complete application router.
///
/// # Routes
///
/// - `/health`
/// - `/api/breathing/...` (see [`breathing::routes`])
/// - `/api/focus/...` (see [`focus::routes`])
pub fn api_router(
    server: &ServerConfig,
    health: HealthState,
    breathing: BreathingAppState,
    focus: FocusAppState,
) -> Router {
    Router::new()
        .merge(health_router(health))
        .nest("/api/breathing", breathing_router(breathing))
        .nest("/api/focus", focus_router(focus))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .max_age(Duration::from_secs(60 * 60));

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
