//! Tracing subscriber initialization.
//!
//! Console logging driven by the `logger` configuration section. The
//! `RUST_LOG` environment variable, when set, takes precedence over the
//! configured level so operators can raise verbosity without a config edit.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerConfig;

/// Initializes the global tracing subscriber.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let result = match config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        "pretty" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))
}
