//! Registration model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::event::{Event, UserRef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserRef>,
    pub event_id: EventRef,
    #[serde(default, alias = "registrationDate", alias = "createdAt")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl Registration {
    /// Id of the event this registration points at
    pub fn event_id(&self) -> &str {
        self.event_id.id()
    }

    /// Whether this registration is for `event_id`
    pub fn is_for(&self, event_id: &str) -> bool {
        self.event_id() == event_id
    }

    /// The populated event, when the backend embedded it
    pub fn event(&self) -> Option<&Event> {
        match &self.event_id {
            EventRef::Populated(event) => Some(event),
            EventRef::Id(_) => None,
        }
    }
}

/// A reference to an event that the backend may or may not have populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Populated(Box<Event>),
    Id(String),
}

impl EventRef {
    pub fn id(&self) -> &str {
        match self {
            EventRef::Populated(event) => &event.id,
            EventRef::Id(id) => id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub event_id: String,
}

/// Body returned by the register call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub registration: Option<Registration>,
    #[serde(default)]
    pub email_sent: bool,
}

/// True when any registration in `registrations` refers to `event_id`
pub fn is_registered_for(registrations: &[Registration], event_id: &str) -> bool {
    registrations.iter().any(|reg| reg.is_for(event_id))
}

/// Registrations whose event falls on or after `today`
///
/// Registrations without a populated, readable event date are not counted.
pub fn count_upcoming(registrations: &[Registration], today: NaiveDate) -> usize {
    registrations
        .iter()
        .filter_map(|reg| reg.event().and_then(Event::day))
        .filter(|day| *day >= today)
        .count()
}
