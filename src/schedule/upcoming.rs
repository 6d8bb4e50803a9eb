//! Upcoming-event filtering
//!
//! An event is upcoming when its date combined with its time of day lies
//! strictly after `now`. Events whose date or time cannot be read are kept:
//! a formatting problem in the backend data must never hide an event.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::models::Event;
use crate::utils::helpers::date_only;
use super::clock::{ClockParseError, ClockTime};

/// Why an event's start could not be determined
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartParseError {
    #[error("invalid event date {0:?}")]
    Date(String),

    #[error("invalid event time: {0}")]
    Time(#[from] ClockParseError),
}

/// Combine an event's date and time fields into one local date-time
pub fn event_start(date: &str, time: &str) -> Result<NaiveDateTime, StartParseError> {
    let day = NaiveDate::parse_from_str(date_only(date), "%Y-%m-%d")
        .map_err(|_| StartParseError::Date(date.to_string()))?;
    let clock = ClockTime::parse(time)?;
    Ok(day.and_time(clock.to_naive_time()))
}

/// Whether a single event counts as upcoming at `now`
pub fn is_upcoming(event: &Event, now: NaiveDateTime) -> bool {
    match event_start(&event.date, &event.time) {
        Ok(start) => start > now,
        Err(e) => {
            warn!(event_id = %event.id, error = %e, "Could not read event start, keeping it as upcoming");
            true
        }
    }
}

/// Keep the events that start strictly after `now`, preserving order
pub fn upcoming_events<I>(events: I, now: NaiveDateTime) -> Vec<Event>
where
    I: IntoIterator<Item = Event>,
{
    events
        .into_iter()
        .filter(|event| is_upcoming(event, now))
        .collect()
}
