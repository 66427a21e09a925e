// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by calendar operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The title is empty after trimming whitespace.
    #[error("Event title must not be empty")]
    EmptyTitle,

    /// The date string is not in `YYYY-MM-DD` form.
    #[error("Invalid date '{0}', expected format: YYYY-MM-DD")]
    InvalidDate(String),
}
