//! The echo fixture: answer absolutely anything with a greeting.
//!
//! No routing and no state beyond the greeting itself. The router's fallback
//! catches every path and method, so the contract is a 200 for any request
//! the network stack manages to deliver.

use std::sync::Arc;

use axum::{extract::State, Router};

#[derive(Clone)]
struct Greeting(Arc<str>);

async fn greet(State(greeting): State<Greeting>) -> String {
    greeting.0.to_string()
}

/// Build the echo router for the given bind address.
pub fn router(host: &str, port: u16) -> Router {
    let greeting = Greeting(Arc::from(format!(
        "Hi, I'm an echo fixture listening on {host}:{port}!\n"
    )));

    Router::new().fallback(greet).with_state(greeting)
}
