//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the CampusEvents client.

use tracing::{info, warn, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{CampusEventsError, Result};

/// Initialize logging based on configuration
///
/// Terminal output goes to stderr so command output on stdout stays clean.
/// The returned guard must be held until shutdown or buffered file lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "campus-events.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| CampusEventsError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin_id: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
