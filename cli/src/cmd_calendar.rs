// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The calendar command, which opens the month grid TUI.

use std::error::Error;

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use daycal_core::FilterMode;

use crate::config::Config;
use crate::tui::{CalendarOptions, run_calendar};
use crate::util::parse_date_arg;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CmdCalendar {
    /// Date to put the cursor on, which also picks the shown month.
    pub date: Option<NaiveDate>,

    /// Pinned "today", instead of the local date.
    pub today: Option<NaiveDate>,

    /// Filter applied at startup, overriding the configuration.
    pub filter: Option<FilterMode>,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Open the month calendar (default)")
            .args(Self::args())
    }

    /// Arguments shared by the `calendar` subcommand and the top-level command.
    pub fn args() -> Vec<Arg> {
        vec![
            arg!(--date <DATE> "Month to open, as YYYY-MM-DD").value_parser(parse_date_arg),
            arg!(--today <DATE> "Treat this YYYY-MM-DD date as today").value_parser(parse_date_arg),
            arg!(--filter <FILTER> "Filter to start with").value_parser(value_parser!(FilterMode)),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: matches.get_one("date").copied(),
            today: matches.get_one("today").copied(),
            filter: matches.get_one("filter").copied(),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening calendar...");
        let options = CalendarOptions {
            date: self.date,
            today: self.today,
            filter: self.filter.unwrap_or(config.filter.default),
        };
        run_calendar(config, options)
    }
}
