// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Value parser for `YYYY-MM-DD` command-line arguments.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    daycal_core::parse_date(s).map_err(|e| e.to_string())
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of the first `first_n` grapheme clusters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n: usize) -> usize {
    let end = byte_offset_of_grapheme(s, first_n);
    s[..end].width()
}

/// Byte offset where the grapheme at `g_idx` starts, or `s.len()` past the end.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Byte range of the grapheme at `g_idx`, if it exists.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// Truncates `s` to at most `max_width` display columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        width += g.width();
        if width > max_width {
            return &s[..i];
        }
    }
    s
}
