//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "FINTRACK_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// `FINTRACK_LOG` wins over `fallback_filter`; an unparsable directive falls
/// back to warnings only. Output goes to stderr so command output stays clean.
pub fn init_tracing(fallback_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
