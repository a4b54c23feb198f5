//! Tracing setup for the server binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` does not override it.
pub const DEFAULT_DIRECTIVE: &str = "leave_engine=info";

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`]. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt().with_env_filter(filter).init();
    });
}
