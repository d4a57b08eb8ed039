use std::sync::Once;

use tracing_subscriber::{EnvFilter, prelude::*};

static INIT: Once = Once::new();

/// Install a fmt subscriber once for the whole test binary
///
/// Filtering follows `RUST_LOG`, defaulting to `fallible=debug`.
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("fallible=debug")),
                    ),
            )
            .init();
    });
}
