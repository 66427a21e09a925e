// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, io::stdout, rc::Rc, time::Duration};

use chrono::{Local, NaiveDate};
use daycal_core::FilterMode;
use ratatui::crossterm::ExecutableCommand;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::{DefaultTerminal, Frame, layout::Rect};

use crate::config::Config;
use crate::tui::calendar_store::CalendarStore;
use crate::tui::calendar_view::CalendarView;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// Wake up at least this often so a date change gets redrawn.
const TICK: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Initially focused day, defaults to today.
    pub date: Option<NaiveDate>,

    /// Fixed "now" date. When unset the local date is read every frame.
    pub today: Option<NaiveDate>,

    pub filter: FilterMode,
}

/// Opens the interactive month calendar and blocks until the user exits.
pub fn run_calendar(config: &Config, options: CalendarOptions) -> Result<(), Box<dyn Error>> {
    let today = options.today.unwrap_or_else(local_today);
    let cursor = options.date.unwrap_or(today);
    let store = CalendarStore::new(today, cursor, options.filter, config.filter.reset_on_change);
    let store = Rc::new(RefCell::new(store));
    tracing::info!(%today, %cursor, filter = %options.filter, "opening calendar");

    let mut terminal = ratatui::init();
    let result = match stdout().execute(EnableMouseCapture) {
        Ok(_) => {
            let mut dispatcher = Dispatcher::new();
            CalendarStore::register_to(store.clone(), &mut dispatcher);
            let mut app = App::new(config, dispatcher, options.today);
            app.run(&store, &mut terminal)
        }
        Err(e) => Err(e.into()),
    }; // release dispatcher and view here to avoid borrow conflicts
    if let Err(e) = stdout().execute(DisableMouseCapture) {
        tracing::warn!(err = %e, "failed to disable mouse capture");
    }
    ratatui::restore();

    let store = store.borrow();
    tracing::info!(events = store.calendar.events().len(), "calendar closed");
    result
}

struct App {
    view: CalendarView,
    dispatcher: Dispatcher,
    pinned_today: Option<NaiveDate>,
    area: Rect,
}

impl App {
    fn new(config: &Config, dispatcher: Dispatcher, pinned_today: Option<NaiveDate>) -> Self {
        Self {
            view: CalendarView::new(config),
            dispatcher,
            pinned_today,
            area: Rect::default(),
        }
    }

    fn run(
        &mut self,
        store: &RefCell<CalendarStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        loop {
            if self.pinned_today.is_none() {
                let today = local_today();
                self.dispatcher.dispatch(Action::RefreshToday(today));
            }

            if let Err(e) = terminal.draw(|frame| self.draw(store, frame)) {
                break Err(e.into());
            }

            match self.read_event(store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }

    fn draw(&mut self, store: &RefCell<CalendarStore>, frame: &mut Frame) {
        self.area = frame.area();
        self.view.render(store, self.area, frame.buffer_mut());

        if let Some(cursor_pos) = self.view.get_cursor_position(store, self.area) {
            frame.set_cursor_position(cursor_pos);
        }
    }

    fn read_event(
        &mut self,
        store: &RefCell<CalendarStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        if !event::poll(TICK)? {
            return Ok(None);
        }

        let area = self.area;
        let dispatcher = &mut self.dispatcher;
        let msg = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.view.on_key(dispatcher, store, area, key)
            }
            Event::Mouse(mouse) => self.view.on_mouse(dispatcher, store, area, mouse),
            _ => None,
        };
        Ok(msg)
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
