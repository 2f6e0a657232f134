//! Logging configuration using tracing
//!
//! Diagnostics go to stderr so they never mix with memo listings on stdout.
//! RUST_LOG wins when set; otherwise `--verbose` picks the filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is unset
///
/// Quiet mode still shows `warn`, which is where a corrupt or unreadable
/// memo file is reported. Verbose mode adds store and repository events
/// (load counts, saves, edits, deletions) from the library and the `mb` binary.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,memobook=debug,mb=debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber
///
/// # Errors
/// Returns an error if the subscriber has already been initialized
pub fn init(verbose: bool) -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| crate::MemoError::Other(format!("Failed to initialize tracing: {}", e)))
}

/// Initialize logging for tests (no-op if already initialized)
pub fn init_test() {
    let _ = init(true);
}
