//! Logging initialization.
//!
//! Logs go to stderr so the REPL's stdout stays exactly the session protocol.
//! `RUST_LOG` overrides the default filter.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "wisesaying=debug"
    } else {
        "wisesaying=warn"
    }
}

/// Installs the global `tracing` subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
