use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber. An explicit `RUST_LOG` wins
/// over the configured default filter.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt().with_env_filter(filter).with_target(false).init();
}
