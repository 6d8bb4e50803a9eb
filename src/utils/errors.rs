//! Error handling for CampusEvents
//!
//! This module defines the main error types used throughout the client
//! and the single taxonomy every API gateway normalizes its failures into.

use thiserror::Error;

/// Main error type for the CampusEvents client
#[derive(Error, Debug)]
pub enum CampusEventsError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures produced by the backend gateways
///
/// Every gateway maps transport problems and bad responses into one of
/// these variants, so pages only ever deal with a single shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Cannot connect to server at {base_url}: {reason}")]
    Transport { base_url: String, reason: String },

    #[error("Request to {base_url} timed out")]
    Timeout { base_url: String },

    #[error("Server returned an empty response. Status: {status}")]
    EmptyResponse { status: u16 },

    #[error("Server returned HTML instead of JSON. Status: {status}. URL: {url}. This usually means the API endpoint was not found.")]
    HtmlResponse { status: u16, url: String },

    #[error("Invalid JSON response from server. URL: {url}. Status: {status}")]
    InvalidJson { status: u16, url: String },

    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Result type alias for CampusEvents operations
pub type Result<T> = std::result::Result<T, CampusEventsError>;

/// Result type alias for gateway operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport { base_url, .. } | ApiError::Timeout { base_url } => format!(
                "Cannot connect to server. Please check that the backend is running at {}.",
                base_url
            ),
            ApiError::EmptyResponse { status } => format!(
                "Server returned an empty response (status {}). Please try again later.",
                status
            ),
            ApiError::HtmlResponse { status, .. } => format!(
                "Server error: API endpoint not found (status {}). Please check server configuration.",
                status
            ),
            ApiError::InvalidJson { .. } => {
                "Server returned invalid data. Please check server logs.".to_string()
            }
            ApiError::Server { message, .. } => message.clone(),
        }
    }

    /// HTTP status attached to the failure, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { .. } | ApiError::Timeout { .. } => None,
            ApiError::EmptyResponse { status }
            | ApiError::HtmlResponse { status, .. }
            | ApiError::InvalidJson { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
        }
    }

    /// Whether the backend answered 404 for this request
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the backend rejected the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl CampusEventsError {
    /// Get error severity level
    ///
    /// Info and Warning are problems with what the user asked for; the
    /// command reports them and exits cleanly.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusEventsError::Config(_) => ErrorSeverity::Critical,
            CampusEventsError::ConfigLoad(_) => ErrorSeverity::Critical,
            CampusEventsError::Http(_) => ErrorSeverity::Critical,
            CampusEventsError::EventNotFound { .. } => ErrorSeverity::Warning,
            CampusEventsError::Api(e) if e.status().is_some_and(|s| (400..500).contains(&s)) => {
                ErrorSeverity::Warning
            }
            CampusEventsError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            CampusEventsError::Api(e) => e.user_message(),
            CampusEventsError::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
