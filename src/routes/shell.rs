//! Shell-passthrough routes.
//!
//! Each route interpolates caller-supplied path segments into a shell command
//! verbatim and returns the captured stdout as the response body. There is
//! deliberately no sanitization: these fixtures exist to be probed with
//! arbitrary input, not hardened against it.

use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Run a command through the state's runner and hand back its stdout.
///
/// A command that runs but exits non-zero still answers with whatever stdout
/// it produced; only a spawn failure becomes an error response.
async fn run(state: &AppState, command: String) -> Result<String, AppError> {
    tracing::info!(%command, "running shell passthrough");
    let output = state.runner.run(&command).await?;

    if !output.success() {
        tracing::warn!(status = ?output.status, stderr = %output.stderr, "command exited non-zero");
    }

    Ok(output.stdout)
}

#[instrument(name = "shell::ping", skip(state))]
pub async fn ping(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<String, AppError> {
    run(&state, format!("ping -c 4 {address}")).await
}

#[instrument(name = "shell::lsb_release", skip(state))]
pub async fn lsb_release(State(state): State<AppState>) -> Result<String, AppError> {
    run(&state, "lsb_release --all".to_string()).await
}

#[instrument(name = "shell::find", skip(state))]
pub async fn find(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<String, AppError> {
    run(&state, format!("find / -name {filename}")).await
}

#[instrument(name = "shell::dpkg", skip(state))]
pub async fn dpkg(
    State(state): State<AppState>,
    Path(package): Path<String>,
) -> Result<String, AppError> {
    run(&state, format!("dpkg -l {package}")).await
}

/// The address the default route would leave from.
#[instrument(name = "shell::myip", skip(state))]
pub async fn myip(State(state): State<AppState>) -> Result<String, AppError> {
    run(&state, r"ip route get 1 | awk '{print $NF;exit}'".to_string()).await
}

/// Echo `output` into `destination`: the process's stdout or stderr, the
/// void, or a file named by the destination itself. Responds with a
/// confirmation rather than the echoed text.
#[instrument(name = "shell::echo", skip(state))]
pub async fn echo(
    State(state): State<AppState>,
    Path((destination, output)): Path<(String, String)>,
) -> Result<String, AppError> {
    let redirect = match destination.as_str() {
        "stdout" => String::new(),
        "stderr" => " 1>&2".to_string(),
        "null" => " > /dev/null".to_string(),
        file => format!(" > {file}"),
    };

    run(&state, format!("echo '{output}'{redirect}")).await?;
    Ok(format!("Echoed '{output}' to {destination}\n"))
}
