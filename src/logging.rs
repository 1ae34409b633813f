use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Installs a global fmt subscriber. `RUST_LOG` takes precedence over `default_filter`.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs the subscriber with the configured `log_filter` as default.
pub fn init_logging_from(settings: &Settings) -> bool {
    init_logging(&settings.log_filter)
}
