// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line and terminal UI of daycal.

mod cli;
mod cmd_calendar;
mod cmd_generate_completion;
mod config;
mod logging;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
