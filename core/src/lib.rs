// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event-management state machine behind the daycal month calendar.
//!
//! The crate is UI-free: a [`Calendar`] owns the event store, the current
//! selection, the popup state and the filter mode, and every change is
//! expressed as an [`Action`].

mod calendar;
mod error;
mod event;
mod filter;
mod store;
mod tone;

pub use crate::calendar::{Action, Calendar, Outcome, Popup, Selection};
pub use crate::error::CalendarError;
pub use crate::event::{CalendarEntry, DATE_FORMAT, Event, format_date, parse_date};
pub use crate::filter::{FilterMode, filter_events, is_past, is_upcoming};
pub use crate::store::EventStore;
pub use crate::tone::{EventTone, tone_of};

/// The name of the daycal application.
pub const APP_NAME: &str = "daycal";
