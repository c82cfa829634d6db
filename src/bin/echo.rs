//! The basic echo fixture.
//!
//! Binds the configured port and answers every request with a fixed greeting.
//! No routing and no state; the simplest thing a platform can deploy and curl.

use clap::Parser;

use decoy::config::{ServerConfig, DEFAULT_ECHO_PORT};
use decoy::environment::EnvSnapshot;
use decoy::{echo, logging, server};

/// Echo fixture: answers every request with a greeting
#[derive(Parser, Debug)]
#[command(name = "decoy-echo", version, about)]
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
    let config = ServerConfig::from_snapshot(&env, DEFAULT_ECHO_PORT)?;

    let app = echo::router(&config.host, config.port);
    server::start(app, &config).await?;

    Ok(())
}
