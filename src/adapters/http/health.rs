//! Health check endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::ports::ExerciseCatalog;

#[derive(Clone)]
pub struct HealthState {
    pub catalog: Arc<dyn ExerciseCatalog>,
    pub started_at: Timestamp,
}

impl HealthState {
    pub fn new(catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self {
            catalog,
            started_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub exercises: usize,
}

/// GET /health
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthStatus> {
    let (status, exercises) = match state.catalog.list().await {
        Ok(exercises) if !exercises.is_empty() => ("healthy", exercises.len()),
        Ok(_) => ("degraded", 0),
        Err(e) => {
            tracing::warn!(error = %e, "catalog unavailable during health check");
            ("degraded", 0)
        }
    };
    let uptime_seconds = Timestamp::now()
        .duration_since(&state.started_at)
        .num_seconds()
        .max(0) as u64;

    Json(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        exercises,
    })
}

pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}
