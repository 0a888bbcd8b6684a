//! Tracing subscriber setup for applications embedding the engine.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset or invalid.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Installs the subscriber described by a [`LoggingConfig`].
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), TryInitError> {
    init_tracing(&config.filter)
}
