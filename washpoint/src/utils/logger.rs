//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

/// Initialize the logger.
///
/// Level defaults to `info`, overridable via `RUST_LOG`. Safe to call
/// more than once; subsequent calls are no-ops.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
