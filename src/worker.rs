//! Worker mode for the dual-mode fixture.
//!
//! Models the background half of a primary/worker pair launched from the same
//! executable by a supervisor: no listener is opened, one heartbeat log line
//! is emitted per second, and the loop never returns on its own — the
//! supervisor is expected to kill the process.

use std::time::Duration;

/// Sentinel launch argument that selects worker mode.
pub const MODE_ARG: &str = "worker";

/// Heartbeat period.
pub const TICK: Duration = Duration::from_secs(1);

/// Run the heartbeat loop forever.
pub async fn run() {
    tracing::info!(pid = std::process::id(), "worker mode, not opening a listener");

    let mut ticks: u64 = 0;
    let mut interval = tokio::time::interval(TICK);
    loop {
        interval.tick().await;
        ticks += 1;
        tracing::info!(ticks, "worker heartbeat");
    }
}

/// Whether the given launch argument selects worker mode.
pub fn is_worker_mode(mode: Option<&str>) -> bool {
    mode == Some(MODE_ARG)
}
