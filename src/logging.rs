//! Diagnostics on stderr via `tracing`.
//!
//! stdout carries the rendered documentation, so log records always go to
//! stderr. `JSONNETDOC_LOG` (EnvFilter syntax, e.g. `jsonnetdoc=debug`)
//! overrides the level picked from `-v` flags.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JSONNETDOC_LOG";

/// Map the number of `-v` flags to a default filter directive.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
