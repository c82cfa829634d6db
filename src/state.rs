//! Shared application state for request handlers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;
use crate::environment::EnvSnapshot;
use crate::instance;
use crate::runner::CommandRunner;

/// Shared state of the diagnostic server, cloneable across handlers via
/// Arc-wrapped fields.
///
/// Everything the diagnostic routes need lives here: the bind config, the
/// startup environment snapshot, the command runner capability, the
/// process-lifetime instance id, the start instant for `/uptime`, and the
/// `/health` hit counter.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub env: Arc<EnvSnapshot>,
    pub runner: Arc<dyn CommandRunner>,
    pub instance_id: Arc<str>,
    started: Instant,
    health_hits: Arc<AtomicU32>,
}

impl AppState {
    /// Creates the state at process startup.
    pub fn new(config: ServerConfig, env: EnvSnapshot, runner: Arc<dyn CommandRunner>) -> Self {
        let instance_id = instance::resolve(&env).into();
        Self {
            config: Arc::new(config),
            env: Arc::new(env),
            runner,
            instance_id,
            started: Instant::now(),
            health_hits: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Elapsed time since startup.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record a `/health` call and return its 1-based ordinal.
    pub fn record_health_hit(&self) -> u32 {
        self.health_hits.fetch_add(1, Ordering::Relaxed) + 1
    }
}
