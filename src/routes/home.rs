//! Root greeting.

use axum::extract::State;

use crate::state::AppState;

/// Greets the caller with the fixture's fixed instance identifier, so a
/// harness can tell which app instance answered.
pub async fn index(State(state): State<AppState>) -> String {
    format!("Hi, I'm a decoy! (instance {})\n", state.instance_id)
}
