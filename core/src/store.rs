// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{CalendarError, Event};

/// Ordered list of events, in insertion order.
///
/// The date is treated as the lookup key, but uniqueness is not enforced:
/// [`EventStore::add`] appends even when the date is already taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event with the trimmed title.
    pub fn add(&mut self, date: NaiveDate, title: &str) -> Result<&Event, CalendarError> {
        let title = validate_title(title)?;
        self.events.push(Event::new(title, date));
        let last = self.events.len() - 1;
        Ok(&self.events[last])
    }

    /// Replaces the title of the first event on `date`.
    ///
    /// Only that first match is renamed. Later events on the same date keep
    /// their titles, whereas [`EventStore::delete`] removes all of them.
    /// Returns `Ok(false)` when there is no event on that date.
    pub fn edit(&mut self, date: NaiveDate, title: &str) -> Result<bool, CalendarError> {
        let title = validate_title(title)?;
        match self.events.iter_mut().find(|e| e.date == date) {
            Some(event) => {
                event.title = title.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every event on `date`, returning how many were removed.
    pub fn delete(&mut self, date: NaiveDate) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.date != date);
        before - self.events.len()
    }

    /// The first event on `date`, if any.
    pub fn find(&self, date: NaiveDate) -> Option<&Event> {
        self.events.iter().find(|e| e.date == date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

fn validate_title(title: &str) -> Result<&str, CalendarError> {
    match title.trim() {
        "" => Err(CalendarError::EmptyTitle),
        trimmed => Ok(trimmed),
    }
}
