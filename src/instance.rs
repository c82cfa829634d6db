//! Instance identifier resolution.
//!
//! The platform injects a `VCAP_APPLICATION` JSON document into every
//! workload it runs; its `instance_id` field identifies this particular
//! instance. Fixtures running outside the platform get a random UUID so the
//! id is still unique and fixed for the process lifetime.

use serde::Deserialize;
use uuid::Uuid;

use crate::environment::EnvSnapshot;

/// Environment variable holding the platform's application metadata.
pub const VCAP_APPLICATION_VAR: &str = "VCAP_APPLICATION";

/// The slice of the platform metadata document the fixtures care about.
#[derive(Debug, Deserialize)]
struct PlatformMetadata {
    instance_id: Option<String>,
}

/// Resolve the instance identifier from the environment snapshot.
///
/// Any absence or malformation of the platform metadata falls back to a
/// freshly generated UUID v4.
pub fn resolve(env: &EnvSnapshot) -> String {
    env.get(VCAP_APPLICATION_VAR)
        .and_then(|raw| serde_json::from_str::<PlatformMetadata>(raw).ok())
        .and_then(|meta| meta.instance_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
