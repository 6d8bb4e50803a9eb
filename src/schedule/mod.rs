//! Date and time logic shared by pages and widgets

pub mod clock;
pub mod upcoming;

pub use clock::{ClockParseError, ClockTime, Period};
pub use upcoming::{event_start, is_upcoming, upcoming_events, StartParseError};
