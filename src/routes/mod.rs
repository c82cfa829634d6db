//! HTTP route handlers for the diagnostic server.
//!
//! Every route is a GET that performs one diagnostic action and returns the
//! result as a plain-text or JSON body. Routes are grouped by the kind of
//! behavior they expose: process state, environment introspection, load
//! generation, and shell passthrough.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod env;
pub mod health;
pub mod home;
pub mod load;
pub mod process;
pub mod shell;

#[cfg(test)]
mod tests;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_span;
use crate::state::AppState;

/// Creates the axum router with all diagnostic routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/uptime", get(process::uptime))
        .route("/sigterm", get(process::list_signals))
        .route("/sigterm/{signal}", get(process::send_signal))
        .route("/delay/{seconds}", get(load::delay))
        .route("/logspew/{kbytes}", get(load::logspew))
        .route("/largetext/{kbytes}", get(load::largetext))
        .route("/env", get(env::all_text))
        .route("/env.json", get(env::all_json))
        .route("/env/{name}", get(env::single))
        .route("/ping/{address}", get(shell::ping))
        .route("/lsb_release", get(shell::lsb_release))
        .route("/find/{filename}", get(shell::find))
        .route("/dpkg/{package}", get(shell::dpkg))
        .route("/myip", get(shell::myip))
        .route("/echo/{destination}/{output}", get(shell::echo))
        .with_state(state)
        // Request ID middleware - creates root span for log correlation
        .layer(middleware::from_fn(request_span))
}
