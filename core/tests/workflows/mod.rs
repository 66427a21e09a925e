// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the daycal-core crate.
//!
//! These tests drive a [`daycal_core::Calendar`] the way the month grid does:
//! day clicks, typing into the popup, and pressing its buttons.

mod event_lifecycle;
mod filtering;
mod popup_flow;
