// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::CalendarError;

/// The textual date format used for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single calendar entry with a title and a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// The title of the event, never empty after trimming.
    pub title: String,

    /// The date of the event, without time of day.
    pub date: NaiveDate,
}

impl Event {
    pub(crate) fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
        }
    }

    /// Converts the event into the all-day instance handed to the month grid.
    pub fn to_entry(&self) -> CalendarEntry {
        let midnight = NaiveDateTime::new(self.date, NaiveTime::MIN);
        CalendarEntry {
            title: self.title.clone(),
            start: midnight,
            end: midnight,
            all_day: true,
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", format_date(self.date), self.title)
    }
}

/// Renderable instance of an event, as consumed by the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
}

impl CalendarEntry {
    /// The calendar day this entry is shown on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(s.to_string()))
}
