// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;

use crate::config::Config;
use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::Page;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_popup::EventPopup;
use crate::tui::filter_bar::FilterBar;
use crate::tui::month_view::MonthView;
use crate::tui::theme::Theme;
use crate::tui::toolbar::Toolbar;

/// The whole calendar screen.
pub struct CalendarView(Page<CalendarStore, CalendarBody>);

impl CalendarView {
    pub fn new(config: &Config) -> Self {
        let page = Page::new(daycal_core::APP_NAME, CalendarBody::new(config))
            .instruction("Select", "<Enter>")
            .instruction("Filter", "<a/p/u>")
            .instruction("Month", "<PgUp/PgDn>")
            .instruction("Today", "<t>")
            .instruction("Exit", "<q>");
        Self(page)
    }
}

impl Component<CalendarStore> for CalendarView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        self.0.on_mouse(dispatcher, store, area, event)
    }
}

/// Toolbar, filter bar and month grid, with the popup on top while open.
pub struct CalendarBody {
    toolbar: Toolbar,
    filter_bar: FilterBar,
    month: MonthView,
    popup: EventPopup,
    popup_open: bool,
}

impl CalendarBody {
    fn new(config: &Config) -> Self {
        let theme = Theme::from(&config.style);
        Self {
            toolbar: Toolbar::new(config.calendar.week_start.into()),
            filter_bar: FilterBar::new(),
            month: MonthView::new(&config.calendar, theme),
            popup: EventPopup::new(),
            popup_open: false,
        }
    }

    fn layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area)
    }

    /// Resets the popup whenever it goes from hidden to open.
    fn sync_popup(&mut self, store: &RefCell<CalendarStore>) {
        let open = store.borrow().calendar.popup().is_open();
        if open && !self.popup_open {
            self.popup.reset(store);
        }
        self.popup_open = open;
    }

    fn after(&mut self, store: &RefCell<CalendarStore>, msg: Option<Message>) -> Option<Message> {
        self.sync_popup(store);
        msg
    }
}

impl Component<CalendarStore> for CalendarBody {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let [toolbar, filter_bar, month] = Self::layout(area);
        self.toolbar.render(store, toolbar, buf);
        self.filter_bar.render(store, filter_bar, buf);
        self.month.render(store, month, buf);
        self.popup.render(store, area, buf);
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        self.popup.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if store.borrow().calendar.popup().is_open() {
            let msg = self.popup.on_key(dispatcher, store, area, event);
            return self.after(store, msg);
        }

        let [_, filter_bar, month] = Self::layout(area);
        let msg = self
            .filter_bar
            .on_key(dispatcher, store, filter_bar, event)
            .or_else(|| self.month.on_key(dispatcher, store, month, event));
        self.after(store, msg)
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        if store.borrow().calendar.popup().is_open() {
            let msg = self.popup.on_mouse(dispatcher, store, area, event);
            return self.after(store, msg);
        }

        let [toolbar, bar, month] = Self::layout(area);
        let msg = self
            .toolbar
            .on_mouse(dispatcher, store, toolbar, event)
            .or_else(|| self.filter_bar.on_mouse(dispatcher, store, bar, event))
            .or_else(|| self.month.on_mouse(dispatcher, store, month, event));
        self.after(store, msg)
    }
}
