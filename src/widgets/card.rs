//! Event cards and detail blocks rendered as text

use crate::models::Event;
use crate::utils::helpers::{format_full_date, format_long_date, truncate_text};

/// Tags shown on a card before collapsing the rest into "+N more"
pub const CARD_TAG_LIMIT: usize = 3;

/// Visible tags plus the overflow label, if any
pub fn tag_summary(tags: &[String]) -> (Vec<&str>, Option<String>) {
    let shown = tags.iter().take(CARD_TAG_LIMIT).map(String::as_str).collect();
    let overflow = (tags.len() > CARD_TAG_LIMIT).then(|| format!("+{} more", tags.len() - CARD_TAG_LIMIT));
    (shown, overflow)
}

fn date_label(event: &Event, long: bool) -> String {
    match event.day() {
        Some(day) if long => format_full_date(day),
        Some(day) => format_long_date(day),
        None => event.date.clone(),
    }
}

/// Compact card used in listings
pub fn render_card(event: &Event) -> String {
    let (tags, overflow) = tag_summary(&event.tags);
    let mut tag_line = tags.join(" · ");
    if let Some(more) = overflow {
        tag_line.push_str(&format!(" {}", more));
    }

    let mut out = format!("{}  ({})\n", event.name, event.id);
    out.push_str(&format!("  When:  {} at {}\n", date_label(event, false), event.display_time()));
    out.push_str(&format!("  Where: {}\n", event.location));
    out.push_str(&format!("  By:    {}\n", event.organizer));
    if !tag_line.is_empty() {
        out.push_str(&format!("  Tags:  {}\n", tag_line));
    }
    out.push_str(&format!("  {}\n", truncate_text(&event.description, 100)));
    out
}

/// Registered headcount, e.g. "1 person" or "4 people"
pub fn attendee_count(event: &Event) -> String {
    match event.attendees.len() {
        1 => "1 person".to_string(),
        n => format!("{} people", n),
    }
}

/// Card for the admin listing, with the headcount appended
pub fn render_admin_row(event: &Event) -> String {
    let mut out = render_card(event);
    out.push_str(&format!("  Attendees: {}\n", attendee_count(event)));
    out
}

/// Full detail block for the event page
pub fn render_details(event: &Event) -> String {
    let mut out = format!("{}\n{}\n", event.name, "=".repeat(event.name.chars().count()));
    out.push_str(&format!("Date:      {}\n", date_label(event, true)));
    out.push_str(&format!("Time:      {}\n", event.display_time()));
    out.push_str(&format!("Location:  {}\n", event.location));
    out.push_str(&format!("Organizer: {}\n", event.organizer));
    if !event.tags.is_empty() {
        out.push_str(&format!("Tags:      {}\n", event.tags.join(", ")));
    }
    if let Some(ref image) = event.image_url {
        out.push_str(&format!("Image:     {}\n", image));
    }
    out.push('\n');
    out.push_str(&event.description);
    out.push('\n');
    out
}
