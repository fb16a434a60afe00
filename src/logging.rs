//! Logging setup.
//!
//! All crate code logs through `tracing`. The binary installs a `fmt`
//! subscriber filtered by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// Log lines go to stderr so command output on stdout stays clean.
///
/// # Environment
/// - `RUST_LOG`: filter directives (default `info`), for example
///   `RUST_LOG=debug` or `RUST_LOG=wage_calculator=trace`
///
/// # Example
/// ```no_run
/// wage_calculator::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Installs a subscriber for tests that shows this crate's `debug!` output
/// through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("wage_calculator=debug"))
        .with_test_writer()
        .try_init();
}
