//! The diagnostic server fixture.
//!
//! Entry point for the `decoy` binary: initializes tracing, snapshots the
//! environment, builds the shared state with the real shell runner, and
//! serves the diagnostic routes until a shutdown signal arrives.

use std::sync::Arc;

use clap::Parser;

use decoy::config::{ServerConfig, DEFAULT_DIAG_PORT};
use decoy::environment::EnvSnapshot;
use decoy::routes::create_router;
use decoy::runner::OsCommandRunner;
use decoy::state::AppState;
use decoy::{logging, server};

/// Diagnostic test server: probe-me routes for platform end-to-end tests
#[derive(Parser, Debug)]
#[command(name = "decoy", version, about)]
struct Args {
    /// Log level filter (e.g., "decoy=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level);

    let env = EnvSnapshot::capture();
    let config = ServerConfig::from_snapshot(&env, DEFAULT_DIAG_PORT)?;

    let state = AppState::new(config, env, Arc::new(OsCommandRunner));
    tracing::info!(
        instance_id = %state.instance_id,
        pid = std::process::id(),
        port = state.config.port,
        "starting diagnostic server"
    );

    let config = Arc::clone(&state.config);
    let app = create_router(state);
    server::start(app, &config).await?;

    Ok(())
}
