//! Canonical time-of-day representation
//!
//! Events arrive with times written either as 24-hour `HH:MM` or as
//! `H:MM AM/PM`. Inside the client a time is always a [`ClockTime`];
//! the two string forms only exist at the wire and display boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Time of day stored as minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

/// Meridiem marker on a 12-hour time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockParseError {
    #[error("time is empty")]
    Empty,

    #[error("time {0:?} is not of the form H:MM")]
    Malformed(String),

    #[error("unknown meridiem marker {0:?}")]
    UnknownPeriod(String),

    #[error("time {0:?} is out of range")]
    OutOfRange(String),
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from a 24-hour hour and a minute
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(ClockTime(hour as u16 * 60 + minute as u16))
        } else {
            None
        }
    }

    /// Build from a 12-hour clock reading
    pub fn from_12h(hour: u8, minute: u8, period: Period) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (period, hour) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        };
        Self::from_hm(hour, minute)
    }

    /// Parse `HH:MM`, `H:MM`, or `H:MM AM/PM`
    ///
    /// The clock part and the meridiem are separated by whitespace. A PM
    /// hour other than 12 gains twelve hours and `12 AM` becomes hour 0.
    pub fn parse(raw: &str) -> Result<Self, ClockParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ClockParseError::Empty);
        }

        let mut parts = raw.split_whitespace();
        let clock = parts.next().ok_or(ClockParseError::Empty)?;
        let period = parts.next();
        if parts.next().is_some() {
            return Err(ClockParseError::Malformed(raw.to_string()));
        }

        let (hours, minutes) = clock
            .split_once(':')
            .ok_or_else(|| ClockParseError::Malformed(raw.to_string()))?;
        let mut hour: u8 = hours
            .parse()
            .map_err(|_| ClockParseError::Malformed(raw.to_string()))?;
        let minute: u8 = minutes
            .parse()
            .map_err(|_| ClockParseError::Malformed(raw.to_string()))?;

        match period.map(str::to_ascii_uppercase).as_deref() {
            None => {}
            Some("PM") => {
                if hour == 0 || hour > 12 {
                    return Err(ClockParseError::OutOfRange(raw.to_string()));
                }
                if hour != 12 {
                    hour += 12;
                }
            }
            Some("AM") => {
                if hour == 0 || hour > 12 {
                    return Err(ClockParseError::OutOfRange(raw.to_string()));
                }
                if hour == 12 {
                    hour = 0;
                }
            }
            Some(other) => return Err(ClockParseError::UnknownPeriod(other.to_string())),
        }

        Self::from_hm(hour, minute).ok_or_else(|| ClockParseError::OutOfRange(raw.to_string()))
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Hour on a 12-hour dial together with its period
    pub fn to_12h_parts(&self) -> (u8, u8, Period) {
        match self.hour() {
            0 => (12, self.minute(), Period::Am),
            h if h < 12 => (h, self.minute(), Period::Am),
            12 => (12, self.minute(), Period::Pm),
            h => (h - 12, self.minute(), Period::Pm),
        }
    }

    /// Wire form, `HH:MM`
    pub fn to_24h(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Display form, `H:MM AM/PM`
    pub fn to_12h(&self) -> String {
        let (hour, minute, period) = self.to_12h_parts();
        format!("{}:{:02} {}", hour, minute, period)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Add minutes, wrapping past midnight
    pub fn wrapping_add_minutes(&self, minutes: i32) -> Self {
        let total = (self.0 as i32 + minutes).rem_euclid(MINUTES_PER_DAY as i32);
        ClockTime(total as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_12h())
    }
}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_24h())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClockTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}
