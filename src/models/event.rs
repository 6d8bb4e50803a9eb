//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{ClockParseError, ClockTime};
use crate::utils::helpers::parse_event_date;
use super::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`, possibly followed by a `T...` time component
    pub date: String,
    /// `HH:MM` or `H:MM AM/PM`
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub attendees: Vec<UserRef>,
}

impl Event {
    /// Calendar day of the event, if the date field is readable
    pub fn day(&self) -> Option<NaiveDate> {
        parse_event_date(&self.date)
    }

    /// Time of day in canonical form
    pub fn clock_time(&self) -> Result<ClockTime, ClockParseError> {
        ClockTime::parse(&self.time)
    }

    /// Time as shown to users, falling back to the raw text
    pub fn display_time(&self) -> String {
        self.clock_time()
            .map(|t| t.to_12h())
            .unwrap_or_else(|_| self.time.clone())
    }
}

/// A reference to a user that the backend may or may not have populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(User),
    Id(String),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Populated(user) => &user.id,
            UserRef::Id(id) => id,
        }
    }
}

/// Payload for creating or updating an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub location: String,
    pub organizer: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query filters for the event listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilters {
    pub club: String,
    pub date: String,
    pub category: String,
    pub keyword: String,
}

impl EventFilters {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Non-empty filters as query pairs, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("club", self.club.trim()),
            ("date", self.date.trim()),
            ("category", self.category.trim()),
            ("keyword", self.keyword.trim()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Set a filter by its query key
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "club" => &mut self.club,
            "date" => &mut self.date,
            "category" => &mut self.category,
            "keyword" => &mut self.keyword,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}
