//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` selects the level
//! (default `warn`); `--debug` forces `debug` for this crate.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber; later calls are ignored
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("navgate_client=debug,navgate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
