//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over the verbosity count when it is set.
pub fn setup_logging(verbosity: u8) {
    let filter = filter_for_verbosity(verbosity);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}
