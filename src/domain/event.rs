//! Calendar event records as delivered by the event source

use crate::error::{MeetingsError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Title used when an event carries no summary
pub const UNTITLED_MEETING: &str = "Untitled Meeting";

/// Start of an event. Timed events carry `dateTime`, all-day events carry `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStart {
    #[serde(rename = "dateTime", default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl EventStart {
    pub fn at(date_time: impl Into<String>) -> Self {
        EventStart {
            date_time: Some(date_time.into()),
            date: None,
        }
    }

    pub fn all_day(date: impl Into<String>) -> Self {
        EventStart {
            date_time: None,
            date: Some(date.into()),
        }
    }
}

/// One calendar event, read-only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "summary", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub start: EventStart,
}

impl EventRecord {
    pub fn new(title: Option<&str>, start: EventStart) -> Self {
        EventRecord {
            title: title.map(str::to_string),
            start,
        }
    }

    /// Title for display, falling back to "Untitled Meeting"
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_MEETING,
        }
    }

    /// Wall-clock start time as written in the payload.
    ///
    /// Date-times keep the offset they were sent with. All-day events start at midnight.
    pub fn start_time(&self) -> Result<NaiveTime> {
        if let Some(raw) = self.start.date_time.as_deref() {
            return DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.time())
                .map_err(|e| self.malformed(format!("invalid start dateTime '{}': {}", raw, e)));
        }

        if let Some(raw) = self.start.date.as_deref() {
            return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|_| NaiveTime::MIN)
                .map_err(|e| self.malformed(format!("invalid start date '{}': {}", raw, e)));
        }

        Err(self.malformed("event has no start dateTime or date".to_string()))
    }

    fn malformed(&self, reason: String) -> MeetingsError {
        MeetingsError::MalformedEvent {
            title: self.display_title().to_string(),
            reason,
        }
    }
}
