// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::Weekday;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Flex;
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_button::ButtonRow;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::month_view::MonthGrid;

const TODAY: usize = 0;
const BACK: usize = 1;
const NEXT: usize = 2;

/// Month label with the Today / Back / Next buttons.
pub struct Toolbar {
    week_start: Weekday,
    buttons: ButtonRow,
}

impl Toolbar {
    pub fn new(week_start: Weekday) -> Self {
        Self {
            week_start,
            buttons: ButtonRow::new(vec!["Today", "Back", "Next"]).flex(Flex::End),
        }
    }
}

impl Component<CalendarStore> for Toolbar {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let grid = MonthGrid::new(store.borrow().cursor, self.week_start);
        Line::from(grid.title()).bold().render(area, buf);
        self.buttons.render(area, buf, None);
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let action = match self.buttons.hit(area, event.column, event.row)? {
            TODAY => Action::SetCursor(store.borrow().today),
            BACK => Action::ShiftMonth(-1),
            NEXT => Action::ShiftMonth(1),
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}
