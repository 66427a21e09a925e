// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::CalendarEntry;

/// Colour class of an entry on the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTone {
    /// The entry is dated before today.
    Past,

    /// The entry is dated today or later.
    Upcoming,
}

/// Classifies an entry for styling.
///
/// Unlike [`crate::FilterMode::Upcoming`], today counts as upcoming here.
pub fn tone_of(entry: &CalendarEntry, today: NaiveDate) -> EventTone {
    if entry.date() < today {
        EventTone::Past
    } else {
        EventTone::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterMode, parse_date};

    fn entry(date: &str) -> CalendarEntry {
        crate::Event::new("x", parse_date(date).unwrap()).to_entry()
    }

    #[test]
    fn classifies_by_day() {
        let today = parse_date("2025-01-01").unwrap();
        assert_eq!(tone_of(&entry("2024-12-31"), today), EventTone::Past);
        assert_eq!(tone_of(&entry("2025-01-01"), today), EventTone::Upcoming);
        assert_eq!(tone_of(&entry("2025-01-02"), today), EventTone::Upcoming);
    }

    #[test]
    fn today_disagrees_with_upcoming_filter() {
        let today = parse_date("2025-01-01").unwrap();
        let event = crate::Event::new("x", today);

        assert_eq!(tone_of(&event.to_entry(), today), EventTone::Upcoming);
        assert!(!FilterMode::Upcoming.matches(&event, today));
    }
}
