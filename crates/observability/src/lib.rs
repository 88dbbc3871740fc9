//! Shared tracing/logging setup for partshelf consumers.
//!
//! The catalog loader and the comparison selector emit diagnostics through
//! `tracing` (skipped records, category locks, cleared selections); this
//! crate installs the subscriber that makes them visible.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON logs, filtered via `RUST_LOG` (default `info`). Safe to call multiple
/// times; subsequent calls are no-ops, so tests can each call it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
