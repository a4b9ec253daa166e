// src/logging.rs
//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG`, when set, overrides the level picked from the flags.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
