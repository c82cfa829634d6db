//! Load-generation routes: hold a request open, spew log lines, or return a
//! large body.
//!
//! Numeric path segments parse through axum's `Path<u64>`, so a non-numeric
//! segment gets axum's own 400 rejection.

use std::time::Duration;

use axum::extract::Path;
use tracing::instrument;

use crate::config::{MAX_LARGETEXT_KBYTES, SPEW_LINE_BYTES};

/// Hold this one request for the given number of seconds, then confirm.
///
/// Only the handling of this request blocks; there is no cap and no
/// cancellation — callers are expected to time out on their side.
#[instrument(name = "load::delay")]
pub async fn delay(Path(seconds): Path<u64>) -> String {
    tokio::time::sleep(Duration::from_secs(seconds)).await;
    format!("Slept for {seconds} seconds\n")
}

/// Write the requested number of kilobyte-sized lines to the process log.
#[instrument(name = "load::logspew")]
pub async fn logspew(Path(kbytes): Path<u64>) -> String {
    let line = "1".repeat(SPEW_LINE_BYTES);
    for _ in 0..kbytes {
        tracing::info!("{line}");
    }
    format!("Just wrote {kbytes} kbytes to the log\n")
}

/// Return `min(kbytes, 5120) * 1024` bytes of text.
#[instrument(name = "load::largetext")]
pub async fn largetext(Path(kbytes): Path<u64>) -> String {
    let kbytes = kbytes.min(MAX_LARGETEXT_KBYTES);
    "0".repeat((kbytes * 1024) as usize)
}
