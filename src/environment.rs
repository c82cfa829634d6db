//! Read-only snapshot of the process environment.
//!
//! The env routes serve from a snapshot captured once at startup, so
//! sequential probes observe a stable environment for the whole process
//! lifetime regardless of later mutation.

use std::collections::BTreeMap;

/// Key/value view of the process environment, captured once.
///
/// Keys are kept sorted so the text and JSON renderings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Values that are not valid UTF-8 are captured lossily rather than
    /// aborting the fixture.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs (used by tests).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a single variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Iterate all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render the whole environment as `NAME=value` lines.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push_str(name);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// The whole environment as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.vars)
    }
}
