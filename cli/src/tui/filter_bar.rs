// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use daycal_core::{Action as CalendarAction, FilterMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_button::ButtonRow;
use crate::tui::dispatcher::{Action, Dispatcher};

const LABEL: &str = "Filter: ";

pub struct FilterBar {
    buttons: ButtonRow,
}

impl FilterBar {
    pub fn new() -> Self {
        let labels = FilterMode::ALL.iter().map(|m| m.label()).collect();
        Self {
            buttons: ButtonRow::new(labels),
        }
    }

    fn buttons_area(area: Rect) -> Rect {
        let [_, buttons] =
            Layout::horizontal([Constraint::Length(LABEL.len() as u16), Constraint::Fill(1)])
                .areas(area);
        buttons
    }

    fn filter(dispatcher: &mut Dispatcher, mode: FilterMode) -> Option<Message> {
        dispatcher.dispatch(Action::Calendar(CalendarAction::Filter(mode)));
        Some(Message::Handled)
    }
}

impl Component<CalendarStore> for FilterBar {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let active = store.borrow().calendar.filter();
        let active = FilterMode::ALL.iter().position(|m| *m == active);

        Line::from(LABEL).bold().render(area, buf);
        self.buttons.render(Self::buttons_area(area), buf, active);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        match event.code {
            KeyCode::Char('a') => Self::filter(dispatcher, FilterMode::All),
            KeyCode::Char('p') => Self::filter(dispatcher, FilterMode::Past),
            KeyCode::Char('u') => Self::filter(dispatcher, FilterMode::Upcoming),
            _ => None,
        }
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let index = self
            .buttons
            .hit(Self::buttons_area(area), event.column, event.row)?;
        let mode = *FilterMode::ALL.get(index)?;
        Self::filter(dispatcher, mode)
    }
}
