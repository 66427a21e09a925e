// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{CalendarEntry, CalendarError, Event, EventStore, FilterMode, filter_events};

/// Visibility and mode of the event popup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    #[default]
    Hidden,

    /// Creating a new event on the selected date.
    Add,

    /// Modifying or removing the event on the selected date.
    Edit,
}

impl Popup {
    pub fn is_open(self) -> bool {
        !matches!(self, Popup::Hidden)
    }
}

/// The day last clicked, and the event found on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    pub event: Option<Event>,
}

/// Everything the calendar can be asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A day cell was clicked.
    SelectDay(NaiveDate),

    /// The popup's text input changed.
    UpdateTitle(String),

    /// The primary popup button (Add or Edit) was pressed.
    Submit,

    /// The Delete button of the edit popup was pressed.
    Delete,

    /// The Cancel button was pressed.
    ClosePopup,

    /// A filter button was pressed.
    Filter(FilterMode),
}

/// What applying an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed.
    Applied,

    /// The action was rejected and the state is unchanged.
    Rejected(CalendarError),

    /// The action does not apply in the current state.
    Ignored,
}

/// State of a single calendar widget.
#[derive(Debug, Clone)]
pub struct Calendar {
    events: EventStore,
    filter: FilterMode,
    selection: Option<Selection>,
    popup: Popup,
    title_input: String,

    /// Whether successful mutations switch the filter back to [`FilterMode::All`].
    reset_filter_on_change: bool,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    pub fn new() -> Self {
        Self {
            events: EventStore::new(),
            filter: FilterMode::All,
            selection: None,
            popup: Popup::Hidden,
            title_input: String::new(),
            reset_filter_on_change: true,
        }
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_reset_filter_on_change(mut self, reset: bool) -> Self {
        self.reset_filter_on_change = reset;
        self
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn popup(&self) -> Popup {
        self.popup
    }

    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    /// The events currently displayed: the filter applied to the whole store.
    pub fn visible_events(&self, today: NaiveDate) -> Vec<&Event> {
        filter_events(&self.events, self.filter, today)
    }

    /// The visible events converted to renderable all-day entries.
    pub fn entries(&self, today: NaiveDate) -> Vec<CalendarEntry> {
        self.visible_events(today)
            .into_iter()
            .map(Event::to_entry)
            .collect()
    }

    /// Applies an action, returning the new state.
    pub fn reduce(mut self, action: &Action) -> Self {
        self.apply(action);
        self
    }

    /// Applies an action in place.
    pub fn apply(&mut self, action: &Action) -> Outcome {
        tracing::debug!(?action, "applying calendar action");
        let outcome = match action {
            Action::SelectDay(date) => {
                self.select_day(*date);
                Outcome::Applied
            }
            Action::UpdateTitle(v) => match self.popup {
                Popup::Hidden => Outcome::Ignored,
                _ => {
                    self.title_input = v.clone();
                    Outcome::Applied
                }
            },
            Action::Submit => self.submit(),
            Action::Delete => match (self.popup, self.selection.as_ref().map(|s| s.date)) {
                (Popup::Edit, Some(date)) => {
                    self.delete_event(date);
                    Outcome::Applied
                }
                _ => Outcome::Ignored,
            },
            Action::ClosePopup => match self.popup {
                Popup::Hidden => Outcome::Ignored,
                _ => {
                    self.close_popup();
                    Outcome::Applied
                }
            },
            Action::Filter(mode) => {
                self.filter_events(*mode);
                Outcome::Applied
            }
        };

        if let Outcome::Rejected(err) = &outcome {
            tracing::debug!(%err, "calendar action rejected");
        }
        outcome
    }

    /// Handles a click on the cell of `date`.
    pub fn select_day(&mut self, date: NaiveDate) {
        let event = self.events.find(date).cloned();
        self.popup = match event {
            Some(_) => Popup::Edit,
            None => Popup::Add,
        };
        self.selection = Some(Selection { date, event });
        self.title_input.clear();
    }

    /// Adds an event and closes the popup. Blank titles keep the popup open.
    pub fn add_event(&mut self, date: NaiveDate, title: &str) -> Result<(), CalendarError> {
        self.events.add(date, title)?;
        self.after_change();
        Ok(())
    }

    /// Renames the first event on `date` and closes the popup.
    /// Blank titles keep the popup open.
    pub fn edit_event(&mut self, date: NaiveDate, title: &str) -> Result<(), CalendarError> {
        if !self.events.edit(date, title)? {
            tracing::debug!(%date, "no event to edit on date");
        }
        self.after_change();
        Ok(())
    }

    /// Removes every event on `date` and closes the popup.
    pub fn delete_event(&mut self, date: NaiveDate) {
        let removed = self.events.delete(date);
        tracing::debug!(%date, removed, "deleted events");
        self.after_change();
    }

    /// Hides the popup and clears the input, leaving the store alone.
    pub fn close_popup(&mut self) {
        self.popup = Popup::Hidden;
        self.title_input.clear();
    }

    /// Switches the filter mode.
    pub fn filter_events(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    fn submit(&mut self) -> Outcome {
        let Some(date) = self.selection.as_ref().map(|s| s.date) else {
            return Outcome::Ignored;
        };

        let title = std::mem::take(&mut self.title_input);
        let result = match self.popup {
            Popup::Hidden => return Outcome::Ignored,
            Popup::Add => self.add_event(date, &title),
            Popup::Edit => self.edit_event(date, &title),
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(err) => {
                self.title_input = title; // keep what the user typed
                Outcome::Rejected(err)
            }
        }
    }

    fn after_change(&mut self) {
        if self.reset_filter_on_change {
            self.filter = FilterMode::All;
        }
        self.close_popup();
    }
}
