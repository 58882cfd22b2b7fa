//! Tracing subscriber setup.
//!
//! Output goes through `tracing` only in debug mode (see
//! [`is_debug_mode`](crate::libs::messages::macros::is_debug_mode)); otherwise
//! the message macros print directly and the subscriber only surfaces library
//! warnings such as records dropped while loading.

use crate::libs::messages::macros::{is_debug_mode, DEBUG_ENV_VAR};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let default_level = if std::env::var(DEBUG_ENV_VAR).is_ok() { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(is_debug_mode())
        .with_writer(std::io::stderr)
        .try_init();
}
