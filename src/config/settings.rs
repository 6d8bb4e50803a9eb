//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the backend base URL directly
pub const API_URL_ENV: &str = "CAMPUS_EVENTS_API_URL";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// View behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    pub banner_timeout_seconds: u64,
    pub toast_timeout_seconds: u64,
    pub login_path: String,
    pub home_event_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub json: bool,
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings, reading `path` instead of `./config` when given
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(config::Environment::with_prefix("CAMPUS_EVENTS").separator("__"));

        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.set_override("api.base_url", url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CampusEventsError> {
        super::validation::validate_settings(self)
    }

    /// Base URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Request timeout for the HTTP client
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    /// How long success and error banners stay visible
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_secs(self.ui.banner_timeout_seconds)
    }

    /// How long toasts stay visible
    pub fn toast_timeout(&self) -> Duration {
        Duration::from_secs(self.ui.toast_timeout_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout_seconds: 10,
                user_agent: "CampusEvents-Client/0.1".to_string(),
            },
            ui: UiConfig {
                banner_timeout_seconds: 3,
                toast_timeout_seconds: 3,
                login_path: "/login".to_string(),
                home_event_limit: 6,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
                json: false,
            },
        }
    }
}
