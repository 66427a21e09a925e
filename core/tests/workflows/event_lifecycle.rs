// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event lifecycle from creation through renaming and deletion.

use daycal_core::{Action, Calendar, CalendarError, FilterMode, Popup};

use crate::common::{calendar_with, date, titles};

fn pair(d: &str, t: &str) -> (String, String) {
    (d.to_string(), t.to_string())
}

#[test]
fn add_edit_delete_meeting() {
    let mut calendar = Calendar::new();
    let day = date("2025-06-01");

    // Act - add
    calendar.add_event(day, "Meeting").unwrap();
    assert_eq!(titles(calendar.events()), [pair("2025-06-01", "Meeting")]);

    // Act - edit
    calendar.edit_event(day, "Meeting Moved").unwrap();
    assert_eq!(
        titles(calendar.events()),
        [pair("2025-06-01", "Meeting Moved")]
    );

    // Act - delete
    calendar.delete_event(day);
    assert!(calendar.events().is_empty());
}

#[test]
fn add_on_free_day_yields_single_event_and_full_view() {
    let today = date("2025-01-01");
    let mut calendar = Calendar::new().with_filter(FilterMode::Past);

    calendar.add_event(date("2031-03-04"), "Launch").unwrap();

    assert_eq!(titles(calendar.events()), [pair("2031-03-04", "Launch")]);
    assert_eq!(
        titles(calendar.visible_events(today)),
        titles(calendar.events())
    );
}

#[test]
fn blank_titles_are_rejected() {
    let mut calendar = calendar_with(&[("2025-06-01", "Meeting")]);

    for blank in ["", "   ", "\t\n"] {
        assert_eq!(
            calendar.add_event(date("2025-06-02"), blank),
            Err(CalendarError::EmptyTitle)
        );
        assert_eq!(
            calendar.edit_event(date("2025-06-01"), blank),
            Err(CalendarError::EmptyTitle)
        );
    }

    assert_eq!(titles(calendar.events()), [pair("2025-06-01", "Meeting")]);
}

#[test]
fn edit_touches_only_the_event_on_that_date() {
    let mut calendar = calendar_with(&[
        ("2025-06-01", "Standup"),
        ("2025-06-02", "Review"),
        ("2025-06-03", "Retro"),
    ]);

    let day = date("2025-06-02");
    calendar.edit_event(day, "Design review").unwrap();

    assert_eq!(
        titles(calendar.events()),
        [
            pair("2025-06-01", "Standup"),
            pair("2025-06-02", "Design review"),
            pair("2025-06-03", "Retro"),
        ]
    );
}

#[test]
fn edit_on_shared_date_renames_only_the_first_event() {
    let calendar = calendar_with(&[
        ("2025-06-01", "First"),
        ("2025-06-02", "Other"),
        ("2025-06-01", "Second"),
    ]);

    let calendar = calendar
        .reduce(&Action::SelectDay(date("2025-06-01")))
        .reduce(&Action::UpdateTitle("Renamed".to_string()))
        .reduce(&Action::Submit);

    assert_eq!(calendar.popup(), Popup::Hidden);
    assert_eq!(
        titles(calendar.events()),
        [
            pair("2025-06-01", "Renamed"),
            pair("2025-06-02", "Other"),
            pair("2025-06-01", "Second"),
        ]
    );
}

#[test]
fn delete_removes_every_event_on_date_and_no_others() {
    let mut calendar = calendar_with(&[
        ("2025-06-01", "First"),
        ("2025-06-02", "Keep"),
        ("2025-06-01", "Duplicate"),
    ]);

    calendar.delete_event(date("2025-06-01"));

    assert_eq!(titles(calendar.events()), [pair("2025-06-02", "Keep")]);
}

#[test]
fn reducer_drives_full_lifecycle() {
    let day = date("2025-06-01");
    let calendar = Calendar::new()
        .reduce(&Action::SelectDay(day))
        .reduce(&Action::UpdateTitle("Meeting".to_string()))
        .reduce(&Action::Submit);
    assert_eq!(titles(calendar.events()), [pair("2025-06-01", "Meeting")]);

    let calendar = calendar
        .reduce(&Action::SelectDay(day))
        .reduce(&Action::UpdateTitle("Meeting Moved".to_string()))
        .reduce(&Action::Submit);
    assert_eq!(
        titles(calendar.events()),
        [pair("2025-06-01", "Meeting Moved")]
    );

    let calendar = calendar
        .reduce(&Action::SelectDay(day))
        .reduce(&Action::Delete);
    assert!(calendar.events().is_empty());
    assert_eq!(calendar.popup(), Popup::Hidden);
}
