//! Configuration loading and constants.
//!
//! Fixtures are configured entirely through environment variables injected by
//! the platform that deploys them, so `ServerConfig` reads from the startup
//! `EnvSnapshot` rather than from a config file. Constants cover the fixture
//! contract values: default ports, the health flake count, the large-text
//! cap, and logging defaults.

use crate::environment::EnvSnapshot;

// =============================================================================
// Network Defaults
// =============================================================================

/// Environment variable carrying the bind port.
pub const PORT_VAR: &str = "PORT";

/// All fixtures bind every interface; the platform routes traffic in.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the echo fixtures.
pub const DEFAULT_ECHO_PORT: u16 = 3000;

/// Default port for the diagnostic server (the platform's default app port).
pub const DEFAULT_DIAG_PORT: u16 = 8080;

// =============================================================================
// Diagnostic Route Contract
// =============================================================================

/// Number of `/health` calls that fail before the endpoint reports healthy.
pub const HEALTH_FLAKE_COUNT: u32 = 3;

/// Upper bound on `/largetext` responses, in kilobytes (5 MB).
pub const MAX_LARGETEXT_KBYTES: u64 = 5 * 1024;

/// Payload size of a single `/logspew` log line, in bytes.
pub const SPEW_LINE_BYTES: usize = 1024;

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "decoy=debug,axum=info";

/// Environment variable selecting the log format ("text" or "json").
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Bind address configuration shared by all three fixtures.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build the config from the startup environment snapshot.
    ///
    /// `PORT` overrides `default_port`; a `PORT` value that is not a valid
    /// port number refuses startup rather than silently falling back.
    pub fn from_snapshot(env: &EnvSnapshot, default_port: u16) -> Result<Self, ConfigError> {
        let port = match env.get(PORT_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => default_port,
        };

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0:?}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        let env = EnvSnapshot::default();
        let config = ServerConfig::from_snapshot(&env, DEFAULT_ECHO_PORT).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_port_read_from_environment() {
        let env = EnvSnapshot::from_pairs([(PORT_VAR, "4567")]);
        let config = ServerConfig::from_snapshot(&env, DEFAULT_DIAG_PORT).unwrap();
        assert_eq!(config.port, 4567);
    }

    #[test]
    fn test_invalid_port_refuses_startup() {
        let env = EnvSnapshot::from_pairs([(PORT_VAR, "not-a-port")]);
        let err = ServerConfig::from_snapshot(&env, DEFAULT_DIAG_PORT).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
