// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod calendar_store;
mod calendar_view;
mod component;
mod component_button;
mod component_input;
mod component_page;
mod dispatcher;
mod event_popup;
mod filter_bar;
mod month_view;
mod theme;
mod toolbar;

pub use app::{CalendarOptions, run_calendar};
