//! Data models module
//!
//! Records exchanged with the backend API

pub mod user;
pub mod event;
pub mod registration;

// Re-export commonly used models
pub use user::{User, Role, LoginRequest, SignupRequest};
pub use event::{Event, EventDraft, EventFilters, UserRef};
pub use registration::{Registration, EventRef, RegisterRequest, RegisterResponse, is_registered_for, count_upcoming};

/// Generic acknowledgement body, e.g. `{"message": "Event deleted"}`
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
