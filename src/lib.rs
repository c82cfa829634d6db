//! decoy — disposable HTTP test fixtures.
//!
//! Three self-contained fixture binaries for end-to-end tests of a deployment
//! platform: a plain echo server, a dual-mode echo/worker process, and a
//! diagnostic server whose routes expose OS-level behavior (delays, log spew,
//! environment introspection, self-signaling, shell passthrough) for a test
//! harness to probe.

pub mod config;
pub mod echo;
pub mod environment;
pub mod error;
pub mod instance;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod runner;
pub mod server;
pub mod state;
pub mod worker;
