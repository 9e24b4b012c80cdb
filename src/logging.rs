//! Tracing setup for binaries embedding the library.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the host process's job.

use tracing_subscriber::EnvFilter;

/// Install a global stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset. Call once at process start;
/// later calls are ignored.
pub fn initialize() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
