//! Diagnostic logging on stderr.
//!
//! Level precedence: `RUST_LOG`, then `--verbose` (debug), then the
//! `log_level` key of the configuration file.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(config_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { config_level };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests running in one process) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
