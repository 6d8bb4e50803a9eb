//! CampusEvents client
//!
//! A terminal client for the college event management backend.
//! This library provides modular components for browsing events, registering
//! for them, managing a personal dashboard and administering events, with
//! session handling and route protection shared by every page.

#![allow(non_snake_case)]

pub mod cli;
pub mod config;
pub mod models;
pub mod pages;
pub mod schedule;
pub mod services;
pub mod state;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, CampusEventsError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{AppContext, AuthState, RouteGuard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
