//! Diagnostic logging to stderr

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "JOTTER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Filter comes from `JOTTER_LOG`, default `warn`.
/// Calling this more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
