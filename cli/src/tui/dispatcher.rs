// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;
use daycal_core::Action as CalendarAction;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forwarded to the calendar state machine.
    Calendar(CalendarAction),

    /// Move the grid cursor by a number of days.
    MoveCursor(i64),

    /// Move the grid cursor by a number of months.
    ShiftMonth(i32),

    /// Put the grid cursor on a date.
    SetCursor(NaiveDate),

    /// The local date may have changed.
    RefreshToday(NaiveDate),
}
