//! Tracing initialization shared by the fixture binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_LOG_FILTER, LOG_FORMAT_VAR};

/// Initialize tracing with priority: CLI flag > `RUST_LOG` > default.
///
/// `LOG_FORMAT=json` switches the fmt layer to structured JSON output for
/// platforms that collect logs as JSON lines.
pub fn init(filter_override: Option<String>) {
    let filter = filter_override
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&filter));

    let json = std::env::var(LOG_FORMAT_VAR)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
