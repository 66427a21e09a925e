// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use daycal_core::{Action as CalendarAction, Popup};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_button::ButtonRow;
use crate::tui::component_input::{Access, Input};
use crate::tui::dispatcher::{Action, Dispatcher};

const WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopupButton {
    Submit,
    Delete,
    Cancel,
}

const ADD_BUTTONS: [(PopupButton, &str); 2] = [
    (PopupButton::Submit, "Add"),
    (PopupButton::Cancel, "Cancel"),
];

const EDIT_BUTTONS: [(PopupButton, &str); 3] = [
    (PopupButton::Submit, "Edit"),
    (PopupButton::Delete, "Delete"),
    (PopupButton::Cancel, "Cancel"),
];

/// Modal for adding an event to, or editing the event of, the selected day.
pub struct EventPopup {
    input: Input<CalendarStore, TitleAccess>,
    focus: usize,
}

impl EventPopup {
    pub fn new() -> Self {
        Self {
            input: Input::new("Enter event title"),
            focus: 0,
        }
    }

    /// Prepares the popup for a freshly opened day.
    pub fn reset(&mut self, store: &RefCell<CalendarStore>) {
        let placeholder = match store.borrow().calendar.popup() {
            Popup::Edit => "Edit event title",
            _ => "Enter event title",
        };
        self.input.set_placeholder(placeholder);
        self.input.reset(store);
        self.focus = 0;
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, button: PopupButton) -> Option<Message> {
        let action = match button {
            PopupButton::Submit => CalendarAction::Submit,
            PopupButton::Delete => CalendarAction::Delete,
            PopupButton::Cancel => CalendarAction::ClosePopup,
        };
        dispatcher.dispatch(Action::Calendar(action));
        Some(Message::Handled)
    }
}

impl Component<CalendarStore> for EventPopup {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let popup = store.borrow().calendar.popup();
        let heading = match popup {
            Popup::Hidden => return,
            Popup::Add => "Add Event",
            Popup::Edit => "Edit/Delete Event",
        };

        let areas = PopupAreas::new(area, popup);
        Clear.render(areas.outer, buf);
        Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(format!(" {heading} ")).bold().centered())
            .render(areas.outer, buf);

        if popup == Popup::Edit {
            let title = store
                .borrow()
                .calendar
                .selection()
                .and_then(|s| s.event.as_ref())
                .map(|e| e.title.clone())
                .unwrap_or_default();
            Line::from(vec!["Event: ".bold(), title.into()]).render(areas.event, buf);
        }

        Block::bordered().render(areas.input_box, buf);
        self.input.render(store, areas.input, buf);

        button_row(popup).render(areas.buttons, buf, Some(self.focus));
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        let popup = store.borrow().calendar.popup();
        match popup.is_open() {
            true => {
                let areas = PopupAreas::new(area, popup);
                self.input.get_cursor_position(store, areas.input)
            }
            false => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let popup = store.borrow().calendar.popup();
        let buttons = buttons(popup);
        match event.code {
            KeyCode::Esc => self.activate(dispatcher, PopupButton::Cancel),
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % buttons.len();
                Some(Message::Handled)
            }
            KeyCode::BackTab => {
                self.focus = (self.focus + buttons.len() - 1) % buttons.len();
                Some(Message::Handled)
            }
            KeyCode::Enter => match buttons.get(self.focus) {
                Some((button, _)) => self.activate(dispatcher, *button),
                None => Some(Message::Handled),
            },
            _ => {
                let input = PopupAreas::new(area, popup).input;
                let msg = self.input.on_key(dispatcher, store, input, event);
                msg.or(Some(Message::Handled))
            }
        }
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        let popup = store.borrow().calendar.popup();
        if event.kind == MouseEventKind::Down(MouseButton::Left) {
            let areas = PopupAreas::new(area, popup);
            if let Some(i) = button_row(popup).hit(areas.buttons, event.column, event.row)
                && let Some((button, _)) = buttons(popup).get(i)
            {
                self.focus = i;
                return self.activate(dispatcher, *button);
            }
        }
        Some(Message::Handled) // swallow everything while open
    }
}

struct TitleAccess;

impl Access<CalendarStore, String> for TitleAccess {
    fn get(store: &RefCell<CalendarStore>) -> String {
        store.borrow().calendar.title_input().to_owned()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::Calendar(CalendarAction::UpdateTitle(value)));
        true
    }
}

fn buttons(popup: Popup) -> &'static [(PopupButton, &'static str)] {
    match popup {
        Popup::Edit => &EDIT_BUTTONS,
        _ => &ADD_BUTTONS,
    }
}

fn button_row(popup: Popup) -> ButtonRow {
    let labels = buttons(popup).iter().map(|(_, label)| *label).collect();
    ButtonRow::new(labels).flex(Flex::Center)
}

struct PopupAreas {
    outer: Rect,
    event: Rect,
    input_box: Rect,
    input: Rect,
    buttons: Rect,
}

impl PopupAreas {
    fn new(area: Rect, popup: Popup) -> Self {
        let event_height = match popup {
            Popup::Edit => 1,
            _ => 0,
        };
        // border 2 + input box 3 + gap 1 + buttons 1
        let height = 7 + event_height;

        let [outer] = Layout::horizontal([Constraint::Length(WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [outer] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(outer);

        let inner = Block::bordered().inner(outer);
        let [event, input_box, _, buttons] = Layout::vertical([
            Constraint::Length(event_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let input = Block::bordered().inner(input_box);

        Self {
            outer,
            event,
            input_box,
            input,
            buttons,
        }
    }
}
