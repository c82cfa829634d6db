//! Deliberately flaky health check endpoint.
//!
//! Fails the first few calls per process lifetime, then succeeds forever.
//! Lets an orchestrator's readiness-probe handling be tested against an app
//! that starts unhealthy and recovers. The counter resets only on restart.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::config::HEALTH_FLAKE_COUNT;
use crate::state::AppState;

/// Health check handler.
///
/// Returns 500 with the hit count for the first [`HEALTH_FLAKE_COUNT`] calls,
/// then "ok" with 200 thereafter.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let hits = state.record_health_hit();

    if hits <= HEALTH_FLAKE_COUNT {
        tracing::warn!(hits, "reporting unhealthy");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unhealthy: hit {hits} of {HEALTH_FLAKE_COUNT}\n"),
        )
    } else {
        (StatusCode::OK, "ok".to_string())
    }
}
