//! Stderr logging for the CLI.
//!
//! The filter comes from `--log-level` when given, else from `RUST_LOG`, else `warn`.
//! Output always goes to stderr so stdout stays parseable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(filter);

    // a subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
