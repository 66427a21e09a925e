// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Filter buttons and past/upcoming colouring.

use daycal_core::{Action, EventTone, FilterMode, tone_of};

use crate::common::{calendar_with, date, titles};

#[test]
fn filter_buttons_with_fixed_now() {
    let today = date("2025-01-01");
    let mut calendar = calendar_with(&[("2024-01-01", "Old"), ("2030-01-01", "New")]);

    calendar.apply(&Action::Filter(FilterMode::Past));
    assert_eq!(
        titles(calendar.visible_events(today)),
        [("2024-01-01".to_string(), "Old".to_string())]
    );

    calendar.apply(&Action::Filter(FilterMode::Upcoming));
    assert_eq!(
        titles(calendar.visible_events(today)),
        [("2030-01-01".to_string(), "New".to_string())]
    );

    calendar.apply(&Action::Filter(FilterMode::All));
    assert_eq!(
        titles(calendar.visible_events(today)),
        [
            ("2024-01-01".to_string(), "Old".to_string()),
            ("2030-01-01".to_string(), "New".to_string()),
        ]
    );
}

#[test]
fn event_dated_today_only_shows_under_all() {
    let today = date("2025-01-01");
    let mut calendar = calendar_with(&[("2025-01-01", "Today")]);

    calendar.filter_events(FilterMode::Past);
    assert!(calendar.visible_events(today).is_empty());

    calendar.filter_events(FilterMode::Upcoming);
    assert!(calendar.visible_events(today).is_empty());

    calendar.filter_events(FilterMode::All);
    assert_eq!(calendar.visible_events(today).len(), 1);
}

#[test]
fn filtering_does_not_mutate_the_store() {
    let today = date("2025-01-01");
    let mut calendar = calendar_with(&[("2024-01-01", "Old"), ("2030-01-01", "New")]);
    let before = calendar.events().clone();

    calendar.filter_events(FilterMode::Past);
    let _ = calendar.visible_events(today);

    assert_eq!(calendar.events(), &before);
}

#[test]
fn view_follows_clock_without_pressing_a_button() {
    let mut calendar = calendar_with(&[("2025-01-02", "Tomorrow")]);
    calendar.filter_events(FilterMode::Upcoming);

    assert_eq!(calendar.visible_events(date("2025-01-01")).len(), 1);
    assert!(calendar.visible_events(date("2025-01-03")).is_empty());
}

#[test]
fn entries_are_coloured_by_day() {
    let today = date("2025-01-01");
    let calendar = calendar_with(&[
        ("2024-12-31", "Yesterday"),
        ("2025-01-01", "Today"),
        ("2025-01-02", "Tomorrow"),
    ]);

    let tones: Vec<_> = calendar
        .entries(today)
        .iter()
        .map(|entry| tone_of(entry, today))
        .collect();

    assert_eq!(
        tones,
        [EventTone::Past, EventTone::Upcoming, EventTone::Upcoming]
    );
}
