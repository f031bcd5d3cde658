//! Externally-sourced schedule rows and their calendar/table projections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::short_time;

/// Role code supplied by the identity provider. Consumed only to branch
/// which view is shown and to trigger a re-fetch when it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Administrative view (dashboard counts).
    Admin,
    /// Instructor view (personal schedule).
    Instructor,
    /// Any other code: no schedule-dependent view is shown.
    Other(u8),
}

impl Role {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Role::Admin,
            2 => Role::Instructor,
            other => Role::Other(other),
        }
    }
}

/// A single schedule row as returned by the remote source.
///
/// Rows are flat mappings of column name to scalar value. The well-known
/// columns (`course_name`, `start_date`, `end_date`, `start_time`,
/// `end_time`) drive the calendar projection; everything else only shows up
/// in the tabular view. Rows are never mutated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleRecord(pub Map<String, Value>);

impl ScheduleRecord {
    /// Look up a column as a string, treating missing and non-string values
    /// as empty.
    pub fn field(&self, name: &str) -> &str {
        self.0.get(name).and_then(Value::as_str).unwrap_or("")
    }
}

/// A render-ready event derived from a schedule row. Never persisted;
/// recomputed whenever the source list changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedEvent {
    pub title: String,
    /// `{start_date}T{start_time}`, no timezone conversion.
    pub start: String,
    /// `{end_date}T{end_time}`, no timezone conversion.
    pub end: String,
    pub display_title: String,
}

/// Column list for the tabular view: the key set of the first record, in
/// key order. Empty when there are no records.
pub fn columns(records: &[ScheduleRecord]) -> Vec<String> {
    records
        .first()
        .map(|record| record.0.keys().cloned().collect())
        .unwrap_or_default()
}

/// Project schedule rows into calendar events.
///
/// The title is `"{course_name} {HH:MM - HH:MM}"`, with the time range
/// rendered empty when either time column is missing. The `"Scheduled"`
/// fallback fires only when `course_name` itself is empty; a non-empty
/// course name always wins, even with both times missing (the title then
/// ends in a trailing space).
pub fn project(records: &[ScheduleRecord]) -> Vec<ProjectedEvent> {
    records.iter().map(project_record).collect()
}

fn project_record(record: &ScheduleRecord) -> ProjectedEvent {
    let course_name = record.field("course_name");
    let start_time = short_time(record.field("start_time"));
    let end_time = short_time(record.field("end_time"));

    let time_range = if !start_time.is_empty() && !end_time.is_empty() {
        format!("{} - {}", start_time, end_time)
    } else {
        String::new()
    };

    let title = if course_name.is_empty() {
        "Scheduled".to_string()
    } else {
        format!("{} {}", course_name, time_range)
    };

    ProjectedEvent {
        display_title: title.clone(),
        title,
        start: format!(
            "{}T{}",
            record.field("start_date"),
            record.field("start_time")
        ),
        end: format!("{}T{}", record.field("end_date"), record.field("end_time")),
    }
}
