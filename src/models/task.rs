#[cfg(test)]
#[path = "task_test.rs"]
mod tests;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::constants::{DRAFT_DUE_DATE, DRAFT_DUE_TIME, TASK_TIMEZONE};

/// A task record mirrored from the server. The server owns every field
/// except `due_label`, which is derived client-side on each load and never
/// sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub summary: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub priority: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Due instant as epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<i64>,

    /// Server-set creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    #[serde(skip)]
    pub due_label: Option<String>,
}

impl Task {
    /// Recompute `due_label` from the raw `due` field. An absent or
    /// unrepresentable `due` leaves the label absent.
    pub fn localize_due(mut self) -> Self {
        self.due_label = self.due.and_then(format_due);
        self
    }
}

/// Format an epoch-milliseconds instant in the dashboard timezone, medium
/// style, e.g. "Jan 1, 2025, 12:00 PM".
pub fn format_due(millis: i64) -> Option<String> {
    let instant = Utc.timestamp_millis_opt(millis).single()?;
    Some(
        instant
            .with_timezone(&TASK_TIMEZONE)
            .format("%b %-d, %Y, %-I:%M %p")
            .to_string(),
    )
}

/// The client-only record composed in the add form. Created with placeholder
/// values, mutated field-by-field as the user types, and consumed on a
/// successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTask {
    pub title: String,
    pub text: String,
    pub priority: u8,
    /// Calendar date, `YYYY-MM-DD`.
    pub due_date: String,
    /// Time of day, `HH:MM`.
    pub due_time: String,
}

impl Default for DraftTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            priority: 0,
            due_date: DRAFT_DUE_DATE.to_string(),
            due_time: DRAFT_DUE_TIME.to_string(),
        }
    }
}

impl DraftTask {
    /// Combine `due_date` and `due_time` into a single timezone-aware
    /// instant, returned as epoch milliseconds. `None` if either field does
    /// not parse or the combination does not exist in the dashboard zone.
    pub fn due_millis(&self) -> Option<i64> {
        let date = NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.due_time, "%H:%M").ok()?;
        let local = TASK_TIMEZONE
            .from_local_datetime(&date.and_time(time))
            .earliest()?;
        Some(local.timestamp_millis())
    }
}
