// Logging: tracing subscriber setup
// Level filter comes from RUST_LOG, e.g. RUST_LOG=opti2bofire=debug

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global fmt subscriber, defaulting to `info`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Subscriber for tests: `debug` level, captured by the test harness.
///
/// Safe to call from several tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
