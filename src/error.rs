use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;

/// Faults a diagnostic route can hit.
///
/// The fixtures make no attempt at recovery or structured error reporting:
/// everything maps to a plain-text 500, which is exactly what a probing
/// harness expects from an unhandled fault. Invalid numeric path segments
/// never reach here — axum rejects those with its own 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("command failed to start: {0}")]
    Command(#[from] io::Error),

    #[error("unknown signal: {0}")]
    UnknownSignal(String),

    #[error("signal delivery failed: {0}")]
    Signal(#[from] nix::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request fault");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
