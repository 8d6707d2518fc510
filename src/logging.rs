//! Diagnostic logging.
//!
//! Filtered by `RUST_LOG`, default `warn`, always to stderr so stdout stays
//! the command's output:
//!
//! - `RUST_LOG=debug` shows the built pattern, match count and wraparound
//! - `RUST_LOG=aj_editor::locate=trace` adds every candidate match

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
