// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;

use crate::Event;

/// Which events the month grid shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every event, in insertion order.
    #[default]
    All,

    /// Events strictly before today.
    Past,

    /// Events strictly after today.
    Upcoming,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Past, FilterMode::Upcoming];

    pub fn matches(self, event: &Event, today: NaiveDate) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Past => is_past(event.date, today),
            FilterMode::Upcoming => is_upcoming(event.date, today),
        }
    }

    /// Human readable label, as shown on the filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Past => "Past",
            FilterMode::Upcoming => "Upcoming",
        }
    }
}

const FILTER_ALL: &str = "all";
const FILTER_PAST: &str = "past";
const FILTER_UPCOMING: &str = "upcoming";

impl AsRef<str> for FilterMode {
    fn as_ref(&self) -> &str {
        match self {
            FilterMode::All => FILTER_ALL,
            FilterMode::Past => FILTER_PAST,
            FilterMode::Upcoming => FILTER_UPCOMING,
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for FilterMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            FILTER_ALL => Ok(FilterMode::All),
            FILTER_PAST => Ok(FilterMode::Past),
            FILTER_UPCOMING => Ok(FilterMode::Upcoming),
            _ => Err(()),
        }
    }
}

/// Whether `date` lies strictly before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Whether `date` lies strictly after `today`.
///
/// NOTE: together with [`is_past`] this leaves `today` itself out of both sets.
pub fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Applies `mode` to the full list of events, keeping their order.
pub fn filter_events<'a, I>(events: I, mode: FilterMode, today: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| mode.matches(event, today))
        .collect()
}
