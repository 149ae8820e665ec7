//! Shared fixtures for Hormonyx tests.

pub mod fixtures;

pub use fixtures::{example_a, example_b, example_history};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process. Honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
