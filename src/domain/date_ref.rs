//! Date references accepted by the entry form's date field

use crate::error::{DiaryError, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// A date as typed by the user, resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before the base date
    LastWeekday(Weekday),
    /// Occurrence of a weekday strictly after the base date
    NextWeekday(Weekday),
    /// Calendar date given as YYYY-MM-DD
    Exact(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || DiaryError::InvalidDateReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            "tomorrow" => return Ok(DateReference::Tomorrow),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return weekday_from_name(day.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return weekday_from_name(day.trim())
                .map(DateReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = weekday_from_name(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(DateReference::Exact)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match *self {
            DateReference::Today => base,
            DateReference::Yesterday => base - Duration::days(1),
            DateReference::Tomorrow => base + Duration::days(1),
            DateReference::Weekday(target) => base - Duration::days(days_back(base, target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(base, target) {
                    0 => 7,
                    n => n,
                };
                base - Duration::days(back)
            }
            DateReference::NextWeekday(target) => {
                let forward = match (7 - days_back(base, target)) % 7 {
                    0 => 7,
                    n => n,
                };
                base + Duration::days(forward)
            }
            DateReference::Exact(date) => date,
        }
    }

    /// Resolve to the timestamp stored on an entry (midnight UTC of the resolved day)
    pub fn resolve_timestamp(&self, base: NaiveDate) -> DateTime<Utc> {
        start_of_day(self.resolve(base))
    }
}

/// Midnight UTC of a calendar date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Days from the most recent `target` (today included) up to `base`
fn days_back(base: NaiveDate, target: Weekday) -> i64 {
    let from = base.weekday().num_days_from_monday() as i64;
    let to = target.num_days_from_monday() as i64;
    (from - to).rem_euclid(7)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
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
