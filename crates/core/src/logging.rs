//! Structured logging infrastructure for the pattern catalogue.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration.

use crate::config::LoggingConfig;
use crate::error::{CoreError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter, preferring `RUST_LOG` over the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the logging system with structured output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// # Example
/// ```no_run
/// use patterns_core::logging;
///
/// logging::init();
/// tracing::info!("Application started");
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize the logging system with JSON output.
///
/// # Example
/// ```no_run
/// use patterns_core::logging;
///
/// logging::init_json();
/// tracing::info!(episode = "concurrent", "Episode started");
/// ```
pub fn init_json() {
    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(fmt::layer().json().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize logging from a [`LoggingConfig`] section.
///
/// Fails instead of panicking when a global subscriber is already set,
/// which happens when several tests or embedders race to initialize.
pub fn try_init_with(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.level));

    let outcome = if config.json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .try_init()
    };

    outcome.map_err(|e| CoreError::LoggingInit(e.to_string()))
}

/// Initialize logging from a [`LoggingConfig`] section, ignoring a
/// subscriber that is already installed.
pub fn init_with(config: &LoggingConfig) {
    if let Err(e) = try_init_with(config) {
        tracing::debug!(error = %e, "Logging was already initialized");
    }
}
