//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Format a date the long way, e.g. "March 5, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date with its weekday, e.g. "Tuesday, March 5, 2024"
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The `YYYY-MM-DD` part of a date string that may carry a time suffix
pub fn date_only(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw).trim()
}

/// Parse the `YYYY-MM-DD` part of a date string
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_only(raw), "%Y-%m-%d").ok()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Split comma separated tags, dropping blanks
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the editable comma separated form
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    });
    re.is_match(email)
}

/// Create a count summary string
pub fn create_count_info(label: &str, count: usize) -> String {
    format!("{}: {}", label, count)
}
