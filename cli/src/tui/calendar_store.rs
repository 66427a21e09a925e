// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::{Days, Months, NaiveDate};
use daycal_core::{Calendar, FilterMode};

use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug)]
pub struct CalendarStore {
    pub calendar: Calendar,

    /// The focused day, which also decides the shown month.
    pub cursor: NaiveDate,

    /// The date filters and colouring compare against.
    pub today: NaiveDate,
}

impl CalendarStore {
    pub fn new(today: NaiveDate, cursor: NaiveDate, filter: FilterMode, reset: bool) -> Self {
        Self {
            calendar: Calendar::new()
                .with_filter(filter)
                .with_reset_filter_on_change(reset),
            cursor,
            today,
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::Calendar(a) => {
                let mut that = that.borrow_mut();
                that.calendar.apply(a);
            }
            Action::MoveCursor(days) => {
                let mut that = that.borrow_mut();
                let magnitude = Days::new(days.unsigned_abs());
                let moved = match *days >= 0 {
                    true => that.cursor.checked_add_days(magnitude),
                    false => that.cursor.checked_sub_days(magnitude),
                };
                if let Some(cursor) = moved {
                    that.cursor = cursor;
                }
            }
            Action::ShiftMonth(months) => {
                let mut that = that.borrow_mut();
                let magnitude = Months::new(months.unsigned_abs());
                let moved = match *months >= 0 {
                    true => that.cursor.checked_add_months(magnitude),
                    false => that.cursor.checked_sub_months(magnitude),
                };
                if let Some(cursor) = moved {
                    that.cursor = cursor;
                }
            }
            Action::SetCursor(date) => {
                let mut that = that.borrow_mut();
                that.cursor = *date;
            }
            Action::RefreshToday(date) => {
                let mut that = that.borrow_mut();
                if that.today != *date {
                    tracing::debug!(from = %that.today, to = %date, "date changed");
                    that.today = *date;
                }
            }
        }));
        dispatcher.register(callback);
    }
}
