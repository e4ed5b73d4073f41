//! Tracing setup for test binaries.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call from every test; only
/// the first call in a process installs anything.
pub fn init_test_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_test_writer()
        .try_init();
}
