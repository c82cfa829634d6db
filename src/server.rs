//! HTTP server startup and graceful shutdown.
//!
//! Fixtures serve plain HTTP behind the platform's ingress. Shutdown is
//! graceful on SIGTERM/SIGINT: in-flight responses are drained before the
//! process exits, which is what makes the self-SIGTERM route observable from
//! the caller's side.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid bind address {0:?}: {1}")]
    Addr(String, #[source] std::net::AddrParseError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind the configured address.
///
/// Split out from [`serve`] so tests can bind port 0 and read the ephemeral
/// address back from the listener.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = raw.parse().map_err(|e| ServerError::Addr(raw, e))?;
    Ok(TcpListener::bind(addr).await?)
}

/// Serve `app` on `listener` until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Bind and serve in one step. Blocks until the server shuts down.
pub async fn start(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}

/// Resolves when SIGTERM or SIGINT is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
