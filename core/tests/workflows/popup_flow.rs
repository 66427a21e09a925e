// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Day clicks and the add/edit popup.

use daycal_core::{Action, Calendar, CalendarError, Outcome, Popup, Selection};

use crate::common::{calendar_with, date};

#[test]
fn click_on_taken_day_selects_its_event() {
    let mut calendar = calendar_with(&[("2025-06-01", "Meeting")]);

    calendar.apply(&Action::SelectDay(date("2025-06-01")));

    assert_eq!(calendar.popup(), Popup::Edit);
    let selection = calendar.selection().cloned().unwrap();
    assert_eq!(selection.date, date("2025-06-01"));
    let event = selection.event.unwrap();
    assert_eq!(event.title, "Meeting");
    assert_eq!(event.date, date("2025-06-01"));
}

#[test]
fn click_on_free_day_opens_add() {
    let mut calendar = calendar_with(&[("2025-06-01", "Meeting")]);

    calendar.apply(&Action::SelectDay(date("2025-06-02")));

    assert_eq!(calendar.popup(), Popup::Add);
    assert_eq!(
        calendar.selection(),
        Some(&Selection {
            date: date("2025-06-02"),
            event: None,
        })
    );
}

#[test]
fn blank_submit_keeps_popup_and_store() {
    let mut calendar = Calendar::new();
    calendar.apply(&Action::SelectDay(date("2025-06-01")));

    for blank in ["", "   "] {
        calendar.apply(&Action::UpdateTitle(blank.to_string()));
        assert_eq!(
            calendar.apply(&Action::Submit),
            Outcome::Rejected(CalendarError::EmptyTitle)
        );
        assert_eq!(calendar.popup(), Popup::Add);
    }

    assert!(calendar.events().is_empty());
}

#[test]
fn cancel_from_edit_leaves_event() {
    let mut calendar = calendar_with(&[("2025-06-01", "Meeting")]);
    calendar.apply(&Action::SelectDay(date("2025-06-01")));
    calendar.apply(&Action::UpdateTitle("Something else".to_string()));

    assert_eq!(calendar.apply(&Action::ClosePopup), Outcome::Applied);

    assert_eq!(calendar.popup(), Popup::Hidden);
    assert_eq!(calendar.title_input(), "");
    let event = calendar.events().find(date("2025-06-01")).unwrap();
    assert_eq!(event.title, "Meeting");
}

#[test]
fn reopening_clears_previous_input() {
    let mut calendar = Calendar::new();
    calendar.apply(&Action::SelectDay(date("2025-06-01")));
    calendar.apply(&Action::UpdateTitle("half typed".to_string()));

    calendar.apply(&Action::SelectDay(date("2025-06-05")));

    assert_eq!(calendar.title_input(), "");
    assert_eq!(calendar.selection().unwrap().date, date("2025-06-05"));
}

#[test]
fn delete_from_edit_popup_closes_it() {
    let mut calendar = calendar_with(&[("2025-06-01", "Meeting"), ("2025-06-02", "Other")]);
    calendar.apply(&Action::SelectDay(date("2025-06-01")));

    assert_eq!(calendar.apply(&Action::Delete), Outcome::Applied);

    assert_eq!(calendar.popup(), Popup::Hidden);
    assert_eq!(calendar.events().len(), 1);
    assert!(calendar.events().find(date("2025-06-01")).is_none());
}
