//! Logging initialization.
//!
//! The library only emits `tracing` events; binaries call [`init`] once to
//! install a subscriber that writes to stderr.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Default filter directive for a `-v` count.
///
/// `0` keeps warnings only, `1` enables debug events from this crate and `2`
/// or more enables trace events.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "kindling=warn",
        1 => "kindling=debug",
        _ => "kindling=trace",
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Later calls are
/// no-ops, as is the first call if another global subscriber is already
/// installed.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
