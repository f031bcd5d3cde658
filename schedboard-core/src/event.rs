//! User-maintained calendar event types.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Three-level priority tag attached to a calendar event, driving display
/// color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
}

impl Importance {
    /// Display color for the event block.
    pub fn color(&self) -> &'static str {
        match self {
            Importance::Low => "#a3e635",    // green-400
            Importance::Medium => "#facc15", // yellow-400
            Importance::High => "#ef4444",   // red-500
        }
    }
}

/// A user-maintained calendar event.
///
/// `date` is an ISO date, optionally extended with a `THH:MM` time. `end`
/// follows the same format and is absent for events without an end time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub importance: Importance,
}

impl CalendarEvent {
    /// The date portion of `date` (everything before the `T`, if any).
    pub fn date_part(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }

    /// The `HH:MM` start time, if the event carries one.
    pub fn start_time(&self) -> Option<&str> {
        self.date.split_once('T').map(|(_, t)| short_time(t))
    }

    /// The `HH:MM` end time, if the event has an end.
    pub fn end_time(&self) -> Option<&str> {
        self.end
            .as_deref()
            .and_then(|end| end.split_once('T'))
            .map(|(_, t)| short_time(t))
    }

    /// The event's date as a `NaiveDate`, when it parses as one.
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_part(), "%Y-%m-%d").ok()
    }
}

/// Truncate a time string to `HH:MM`.
pub(crate) fn short_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

/// The single event every fresh store starts out with.
pub fn seed_events() -> Vec<CalendarEvent> {
    vec![CalendarEvent {
        id: "1".to_string(),
        title: "Events Handling".to_string(),
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        end: None,
        description: String::new(),
        importance: Importance::Medium,
    }]
}
