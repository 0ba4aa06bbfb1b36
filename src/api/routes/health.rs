//! Health Routes
//!
//! Health check endpoints for monitoring.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. Degraded when the wishes file cannot be read.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let total_wishes = match state.store.load().await {
        Ok(wishes) => Some(wishes.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read wishes file");
            None
        }
    };

    let status = if total_wishes.is_some() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        wishes_file: state.store.path().display().to_string(),
        total_wishes,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
