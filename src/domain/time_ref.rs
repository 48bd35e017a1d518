//! Day selection from the command line

use crate::error::{MeetingsError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A day selected on the command line, resolved against today's date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeReference {
    #[default]
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it matches, otherwise the most recent past occurrence
    Weekday(Weekday),
    /// Strictly before today
    LastWeekday(Weekday),
    /// Strictly after today
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference such as `today`, `last monday` or `2024-03-01`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MeetingsError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(TimeReference::SpecificDate)
            .map_err(|_| invalid())
    }

    /// Resolve to a concrete date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match *self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(target) => today - Duration::days(days_back(today, target)),
            TimeReference::LastWeekday(target) => {
                let back = match days_back(today, target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match days_forward(today, target) {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(forward)
            }
            TimeReference::SpecificDate(date) => date,
        }
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn days_back(from: NaiveDate, target: Weekday) -> i64 {
    let current = from.weekday().num_days_from_monday() as i64;
    (current - target.num_days_from_monday() as i64).rem_euclid(7)
}

fn days_forward(from: NaiveDate, target: Weekday) -> i64 {
    (7 - days_back(from, target)) % 7
}
