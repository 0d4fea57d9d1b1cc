//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing` so that report output on
//! stdout stays machine-readable. `RUST_LOG` always wins over `-v` flags.
//!
//! ```ignore
//! use revleak::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Map a `-v` count onto a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
