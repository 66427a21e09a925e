// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::NaiveDate;

use daycal_core::{Calendar, Event, parse_date};

/// Parses a `YYYY-MM-DD` date, panicking on malformed input.
#[must_use]
pub fn date(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or_else(|e| panic!("bad test date {s}: {e}"))
}

/// Creates a calendar holding the given `(date, title)` events, in order.
///
/// # Example
///
/// ```ignore
/// let calendar = calendar_with(&[("2024-01-01", "Old"), ("2030-01-01", "New")]);
/// ```
#[must_use]
pub fn calendar_with(events: &[(&str, &str)]) -> Calendar {
    let mut calendar = Calendar::new();
    for (d, title) in events {
        calendar
            .add_event(date(d), title)
            .expect("fixture titles are not blank");
    }
    calendar
}

/// Collects `(date, title)` pairs for easy comparison.
#[must_use]
pub fn titles<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<(String, String)> {
    events
        .into_iter()
        .map(|e| (daycal_core::format_date(e.date), e.title.clone()))
        .collect()
}
