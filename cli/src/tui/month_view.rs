// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use daycal_core::{Action as CalendarAction, CalendarEntry};
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::config::CalendarConfig;
use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::theme::Theme;
use crate::util::truncate_to_width;

const WEEKS: usize = 6;
const CELLS: usize = WEEKS * 7;

/// The 6x7 block of days shown for the month of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    month_start: NaiveDate,
    first_cell: NaiveDate,
    week_start: Weekday,
}

impl MonthGrid {
    pub fn new(date: NaiveDate, week_start: Weekday) -> Self {
        let month_start = date.with_day(1).unwrap_or(date);
        let offset = (7 + month_start.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let first_cell = month_start
            .checked_sub_days(Days::new(offset.into()))
            .unwrap_or(month_start);

        Self {
            month_start,
            first_cell,
            week_start,
        }
    }

    /// Date of the cell at `index`, counted row by row.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        match index < CELLS {
            true => self.first_cell.checked_add_days(Days::new(index as u64)),
            false => None,
        }
    }

    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month_start.year() && date.month() == self.month_start.month()
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        std::iter::successors(Some(self.week_start), |d| Some(d.succ())).take(7)
    }

    /// Month label, e.g. "June 2025".
    pub fn title(&self) -> String {
        self.month_start.format("%B %Y").to_string()
    }
}

pub struct MonthView {
    week_start: Weekday,
    max_events_per_day: usize,
    theme: Theme,
}

impl MonthView {
    pub fn new(config: &CalendarConfig, theme: Theme) -> Self {
        Self {
            week_start: config.week_start.into(),
            max_events_per_day: config.max_events_per_day,
            theme,
        }
    }

    fn grid(&self, store: &RefCell<CalendarStore>) -> MonthGrid {
        MonthGrid::new(store.borrow().cursor, self.week_start)
    }

    fn date_at_position(
        &self,
        grid: &MonthGrid,
        area: Rect,
        column: u16,
        row: u16,
    ) -> Option<NaiveDate> {
        let (_, cells) = layout(area);
        let position = Position::new(column, row);
        cells
            .iter()
            .position(|cell| cell.contains(position))
            .and_then(|i| grid.date_at(i))
    }

    fn render_cell(
        &self,
        store: &CalendarStore,
        grid: &MonthGrid,
        date: NaiveDate,
        entries: &[CalendarEntry],
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = Block::new()
            .borders(Borders::TOP | Borders::LEFT)
            .border_style(Style::new().dark_gray());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let mut day_style = Style::new();
        if !grid.in_month(date) {
            day_style = day_style.dark_gray();
        }
        if date == store.today {
            day_style = day_style.yellow().bold();
        }
        if date == store.cursor {
            day_style = day_style.reversed();
        }
        let mut y = inner.y;
        Line::styled(format!("{:>2}", date.day()), day_style).render(row_at(inner, y), buf);
        y += 1;

        let events: Vec<_> = entries.iter().filter(|e| e.date() == date).collect();
        let lines = (inner.bottom() - y) as usize;
        let (shown, hidden) = fit_events(events.len(), self.max_events_per_day, lines);
        let width = inner.width as usize;
        for entry in events.iter().take(shown) {
            let style = self.theme.event_style(entry, store.today);
            let title = truncate_to_width(&entry.title, width);
            Line::styled(title.to_string(), style).render(row_at(inner, y), buf);
            y += 1;
        }
        if hidden > 0 && y < inner.bottom() {
            let more = format!("+{hidden} more");
            let more = truncate_to_width(&more, width).to_string();
            Line::styled(more, Style::new().dark_gray()).render(row_at(inner, y), buf);
        }
    }
}

impl Component<CalendarStore> for MonthView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let grid = self.grid(store);
        let store = store.borrow();
        let entries = store.calendar.entries(store.today);

        let (header, cells) = layout(area);
        let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(header);
        for (weekday, column) in grid.weekdays().zip(columns.iter()) {
            Line::from(weekday.to_string())
                .bold()
                .centered()
                .render(*column, buf);
        }

        for (i, cell) in cells.iter().enumerate() {
            if let Some(date) = grid.date_at(i) {
                self.render_cell(&store, &grid, date, &entries, *cell, buf);
            }
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Left => Action::MoveCursor(-1),
            KeyCode::Right => Action::MoveCursor(1),
            KeyCode::Up => Action::MoveCursor(-7),
            KeyCode::Down => Action::MoveCursor(7),
            KeyCode::PageUp | KeyCode::Char('[') => Action::ShiftMonth(-1),
            KeyCode::PageDown | KeyCode::Char(']') => Action::ShiftMonth(1),
            KeyCode::Char('t') => Action::SetCursor(store.borrow().today),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = store.borrow().cursor;
                Action::Calendar(CalendarAction::SelectDay(cursor))
            }
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }

    fn on_mouse(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: MouseEvent,
    ) -> Option<Message> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let grid = self.grid(store);
                let date = self.date_at_position(&grid, area, event.column, event.row)?;
                dispatcher.dispatch(Action::SetCursor(date));
                dispatcher.dispatch(Action::Calendar(CalendarAction::SelectDay(date)));
                Some(Message::Handled)
            }
            MouseEventKind::ScrollUp => {
                dispatcher.dispatch(Action::ShiftMonth(-1));
                Some(Message::Handled)
            }
            MouseEventKind::ScrollDown => {
                dispatcher.dispatch(Action::ShiftMonth(1));
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}

/// Weekday header row and the day cells, row by row.
fn layout(area: Rect) -> (Rect, Vec<Rect>) {
    let [header, body] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    let cells = Layout::vertical([Constraint::Ratio(1, WEEKS as u32); WEEKS])
        .split(body)
        .iter()
        .flat_map(|row| {
            Layout::horizontal([Constraint::Ratio(1, 7); 7])
                .split(*row)
                .to_vec()
        })
        .collect();
    (header, cells)
}

fn row_at(area: Rect, y: u16) -> Rect {
    Rect::new(area.x, y, area.width, 1)
}

/// Events drawn in a cell and the number folded into "+N more", given the
/// free lines of the cell.
fn fit_events(count: usize, max_events: usize, lines: usize) -> (usize, usize) {
    if count <= max_events.min(lines) {
        return (count, 0);
    }
    let shown = max_events.min(lines.saturating_sub(1));
    (shown, count - shown)
}
