use std::env;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Once-only tracing subscriber setup for tests.
///
/// Honors `RUST_LOG`; defaults to `debug` when unset.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new("debug")
        };

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_ok() {
            info!("test setup complete");
        }
    });
}
