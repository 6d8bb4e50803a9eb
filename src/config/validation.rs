//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CampusEventsError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_ui_config(&settings.ui)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(CampusEventsError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url).map_err(|e| {
        CampusEventsError::Config(format!("Invalid API base URL {}: {}", config.base_url, e))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CampusEventsError::Config(
            format!("API base URL must use http or https, got {}", parsed.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(CampusEventsError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate view configuration
fn validate_ui_config(config: &super::UiConfig) -> Result<()> {
    if !config.login_path.starts_with('/') {
        return Err(CampusEventsError::Config(
            format!("Login path must start with '/': {}", config.login_path)
        ));
    }

    if config.home_event_limit == 0 {
        return Err(CampusEventsError::Config(
            "Home event limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusEventsError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusEventsError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
