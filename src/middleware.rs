//! Request tracing middleware.
//!
//! Each probe gets a UUID v4 request id and a span wrapping its whole
//! lifecycle, so log lines from one probe (including any log spew or shell
//! output it triggers) can be correlated in the collected process log.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that wraps each request in a tracing span and logs completion.
///
/// Installed as the outermost layer so the span covers the handler and
/// everything it awaits.
pub async fn request_span(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}
