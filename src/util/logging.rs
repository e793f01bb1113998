//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events. Applications and tests that want
//! to see them call [`init_tracing`] once.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive (e.g. `plymesh=debug`).
pub const LOG_ENV: &str = "PLYMESH_LOG";

/// Install a fmt subscriber filtered by `PLYMESH_LOG`.
///
/// Does nothing if the variable is unset or a global subscriber is already
/// installed. Returns true if this call installed the subscriber.
pub fn init_tracing() -> bool {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return false;
    };

    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
