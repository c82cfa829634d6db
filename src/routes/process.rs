//! Process state and process-control routes.

use std::str::FromStr;

use axum::extract::{Path, State};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Whole seconds since process start.
pub async fn uptime(State(state): State<AppState>) -> String {
    state.uptime().as_secs().to_string()
}

/// List the signal names `/sigterm/{signal}` accepts.
pub async fn list_signals() -> String {
    let names: Vec<&str> = Signal::iterator().map(Signal::as_str).collect();
    format!("Deliverable signals: {}\n", names.join(" "))
}

/// Deliver the named signal to this very process.
///
/// Used to test an orchestrator's handling of apps that terminate (or
/// ignore termination). `SIGKILL` naturally means no response is sent;
/// `SIGTERM` drains this response through graceful shutdown and then exits.
#[instrument(name = "process::send_signal")]
pub async fn send_signal(Path(name): Path<String>) -> Result<String, AppError> {
    let sig = parse_signal(&name)?;
    let pid = Pid::this();

    tracing::warn!(signal = %sig, %pid, "delivering signal to own process");
    signal::kill(pid, sig)?;

    Ok(format!("Sent {sig} to pid {pid}\n"))
}

/// Accepts names with or without the `SIG` prefix, case-insensitively.
fn parse_signal(name: &str) -> Result<Signal, AppError> {
    let upper = name.to_ascii_uppercase();
    let full = if upper.starts_with("SIG") {
        upper
    } else {
        format!("SIG{upper}")
    };

    Signal::from_str(&full).map_err(|_| AppError::UnknownSignal(name.to_string()))
}
