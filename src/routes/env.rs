//! Environment introspection routes.
//!
//! All three serve from the snapshot captured at startup, so a harness sees
//! the environment the process was launched with.

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::state::AppState;

/// Value of a single named variable. An unset variable answers 200 with an
/// empty body, not 404.
pub async fn single(State(state): State<AppState>, Path(name): Path<String>) -> String {
    state.env.get(&name).unwrap_or_default().to_string()
}

/// The whole environment as `NAME=value` text lines.
pub async fn all_text(State(state): State<AppState>) -> String {
    state.env.render_text()
}

/// The whole environment as a JSON object.
pub async fn all_json(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.env.to_json())
}
