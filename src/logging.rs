//! Tracing setup for binaries and demos
//!
//! The library itself only emits `tracing` events. Installing a subscriber is
//! left to whoever owns `main`.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`)
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is left in place.
pub fn init() -> bool {
    init_with_filter(DEFAULT_FILTER)
}

/// Same as [`init`] with an explicit fallback filter
pub fn init_with_filter(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
