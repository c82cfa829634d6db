//! The dual-mode fixture.
//!
//! Models a supervisor spawning a primary/worker pair from the same
//! executable: launched with a trailing `worker` argument it runs the
//! heartbeat loop and never opens a listener, otherwise it behaves exactly
//! like the echo fixture.

use clap::Parser;

use decoy::config::{ServerConfig, DEFAULT_ECHO_PORT};
use decoy::environment::EnvSnapshot;
use decoy::{echo, logging, server, worker};

/// Dual-mode fixture: echo server, or a heartbeat worker when told so
#[derive(Parser, Debug)]
#[command(name = "decoy-multi", version, about)]
struct Args {
    /// Log level filter (e.g., "decoy=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Launch mode; "worker" selects the non-serving heartbeat loop
    mode: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level);

    if worker::is_worker_mode(args.mode.as_deref()) {
        worker::run().await;
        unreachable!("worker loop never returns");
    }

    let env = EnvSnapshot::capture();
    let config = ServerConfig::from_snapshot(&env, DEFAULT_ECHO_PORT)?;

    let app = echo::router(&config.host, config.port);
    server::start(app, &config).await?;

    Ok(())
}
