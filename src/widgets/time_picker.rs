//! 12-hour time picker
//!
//! Users pick an hour (1-12), a minute and AM/PM; the confirmed value is
//! always handed back in canonical `HH:MM` form.

use crate::schedule::{ClockTime, Period};
use crate::utils::errors::{CampusEventsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePicker {
    hour: u8,
    minute: u8,
    period: Period,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            period: Period::Am,
        }
    }
}

impl TimePicker {
    /// Start from a stored value; unreadable values fall back to 12:00 AM
    pub fn from_value(value: &str) -> Self {
        match ClockTime::parse(value) {
            Ok(time) => {
                let (hour, minute, period) = time.to_12h_parts();
                Self { hour, minute, period }
            }
            Err(_) => Self::default(),
        }
    }

    pub fn hours() -> impl Iterator<Item = u8> {
        1..=12
    }

    pub fn minutes() -> impl Iterator<Item = u8> {
        0..60
    }

    pub fn set_hour(&mut self, hour: u8) -> Result<()> {
        if !(1..=12).contains(&hour) {
            return Err(CampusEventsError::InvalidInput(format!("Hour must be between 1 and 12, got {}", hour)));
        }
        self.hour = hour;
        Ok(())
    }

    pub fn set_minute(&mut self, minute: u8) -> Result<()> {
        if minute >= 60 {
            return Err(CampusEventsError::InvalidInput(format!("Minute must be below 60, got {}", minute)));
        }
        self.minute = minute;
        Ok(())
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn value(&self) -> ClockTime {
        ClockTime::from_12h(self.hour, self.minute, self.period).unwrap_or(ClockTime::MIDNIGHT)
    }

    /// Confirmed selection in wire form
    pub fn confirm(&self) -> String {
        self.value().to_24h()
    }

    /// Header shown above the picker, e.g. "02:30 PM"
    pub fn header(&self) -> String {
        format!("{:02}:{:02} {}", self.hour, self.minute, self.period)
    }
}
