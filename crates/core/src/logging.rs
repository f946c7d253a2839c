//! Structured logging infrastructure for Sigchain.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the logging system with structured output.
///
/// Log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `default_level`.
///
/// # Example
/// ```no_run
/// use sigchain_core::logging;
///
/// logging::init("info");
/// tracing::info!("Application started");
/// ```
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize the logging system with JSON output for production environments.
///
/// # Example
/// ```no_run
/// use sigchain_core::logging;
///
/// logging::init_json("info");
/// tracing::info!(service = "sigchain-node", "Service started");
/// ```
pub fn init_json(default_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt::layer().json().with_target(true).with_thread_ids(true))
        .init();
}

/// Initialize logging from a [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig) {
    match config.format {
        LogFormat::Pretty => init(&config.level),
        LogFormat::Json => init_json(&config.level),
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_or_default(directives.as_deref(), default_level)
}

/// Builds a filter from `directives`, falling back to `default_level` when
/// they are absent or do not parse.
fn filter_or_default(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}
