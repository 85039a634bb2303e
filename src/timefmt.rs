//! Timestamp Formatting Helpers
//!
//! Pure formatting for conversation previews and message bubbles. The
//! relative buckets are part of the client's observable behavior and must
//! not drift: under a minute is "Just now", minutes and hours are always
//! plural, days are singular only at exactly one.

use chrono::{DateTime, Local, Utc};

/// Relative age of a timestamp against an explicit "now".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{} hours ago", hours);
    }

    let days = elapsed.num_days();
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Relative age of a timestamp against the current wall clock.
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    format_relative_time(timestamp, Utc::now())
}

/// Clock time of a message in the local timezone, zero-padded `HH:MM`.
pub fn format_message_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}
