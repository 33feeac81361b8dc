//! Logging initialization
//!
//! Sets up the tracing subscriber used by the admin core. Applications
//! embedding the crate may install their own subscriber instead; calling
//! [`init_logging`] more than once is harmless.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so embedding applications that already installed a subscriber
    // keep theirs
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
