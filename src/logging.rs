//! Logging bootstrap
//!
//! Diagnostics go to standard error through `tracing`; the report itself only
//! ever goes to the configured output file.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map a user-supplied level name onto an `EnvFilter` directive
///
/// Accepts the usual names in any case, plus `warning` and `critical`.
/// Unrecognised values fall back to `info`.
pub fn filter_directive(log_level: &str) -> &'static str {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        "off" => "off",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber
///
/// `RUST_LOG`, when set and valid, takes precedence over `log_level`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
