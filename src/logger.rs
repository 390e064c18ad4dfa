//! Logging setup for the `yoda` binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr logger.
///
/// Stdout is reserved for the swap dialogue, so log lines go to stderr.
/// `RUST_LOG` overrides the default filter.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "yoda_swap=debug,warn"
    } else {
        "yoda_swap=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // An already-installed subscriber stays in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
