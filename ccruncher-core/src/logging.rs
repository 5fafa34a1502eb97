use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// Diagnostics always go to stderr so reports written to stdout stay clean:
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Human readable output when stderr is a terminal
/// - JSON with flattened event fields otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}

/// Colorize pretty output only when a person is watching.
pub fn default_color() -> bool {
    io::stdout().is_terminal()
}
