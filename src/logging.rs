//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with the tables printed on
//! stdout. `RUST_LOG` takes precedence over the defaults below.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive: warnings only, or per-category detail when verbose
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ynab_template=debug"
    } else {
        "ynab_template=warn"
    }
}

/// Initialize the global tracing subscriber once per process
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    });
}
