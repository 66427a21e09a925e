// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use daycal_core::{CalendarEntry, EventTone, tone_of};
use ratatui::style::{Color, Style};

use crate::config::StyleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub past: Color,
    pub upcoming: Color,
    pub foreground: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

impl From<&StyleConfig> for Theme {
    fn from(config: &StyleConfig) -> Self {
        Self {
            past: config.past.0,
            upcoming: config.upcoming.0,
            foreground: config.foreground.0,
        }
    }
}

impl Theme {
    /// Style of one entry on the grid, by its tone relative to `today`.
    pub fn event_style(&self, entry: &CalendarEntry, today: NaiveDate) -> Style {
        let bg = match tone_of(entry, today) {
            EventTone::Past => self.past,
            EventTone::Upcoming => self.upcoming,
        };
        Style::new().bg(bg).fg(self.foreground)
    }
}
