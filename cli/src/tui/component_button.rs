// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::rc::Rc;

use ratatui::layout::{Flex, Position};
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

const NORMAL: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const HIGHLIGHTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// A single-line row of clickable labels.
#[derive(Debug, Clone)]
pub struct ButtonRow {
    labels: Vec<&'static str>,
    flex: Flex,
}

impl ButtonRow {
    pub fn new(labels: Vec<&'static str>) -> Self {
        Self {
            labels,
            flex: Flex::Start,
        }
    }

    pub fn flex(mut self, flex: Flex) -> Self {
        self.flex = flex;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, highlighted: Option<usize>) {
        for (i, (label, rect)) in self.labels.iter().zip(self.areas(area).iter()).enumerate() {
            let style = match highlighted == Some(i) {
                true => HIGHLIGHTED,
                false => NORMAL,
            };
            Line::styled(format!(" {label} "), style).render(*rect, buf);
        }
    }

    /// Index of the button under the given cell.
    pub fn hit(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.areas(area).iter().position(|r| r.contains(position))
    }

    pub fn areas(&self, area: Rect) -> Rc<[Rect]> {
        // padding 1 on both sides
        let constraints = self
            .labels
            .iter()
            .map(|label| Constraint::Length(label.width() as u16 + 2));

        let row = Rect { height: 1, ..area };
        Layout::horizontal(constraints)
            .flex(self.flex)
            .spacing(1)
            .split(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ButtonRow {
        ButtonRow::new(vec!["All", "Past", "Upcoming"])
    }

    #[test]
    fn lays_out_buttons_left_to_right() {
        let areas = row().areas(Rect::new(0, 0, 40, 1));
        assert_eq!(areas[0], Rect::new(0, 0, 5, 1));
        assert_eq!(areas[1], Rect::new(6, 0, 6, 1));
        assert_eq!(areas[2], Rect::new(13, 0, 10, 1));
    }

    #[test]
    fn hits_buttons_by_position() {
        let area = Rect::new(2, 5, 40, 1);
        let row = row();
        assert_eq!(row.hit(area, 2, 5), Some(0));
        assert_eq!(row.hit(area, 9, 5), Some(1));
        assert_eq!(row.hit(area, 15, 5), Some(2));
        assert_eq!(row.hit(area, 15, 6), None);
        assert_eq!(row.hit(area, 39, 5), None);
    }

    #[test]
    fn renders_labels() {
        let area = Rect::new(0, 0, 24, 1);
        let mut buf = Buffer::empty(area);
        row().render(area, &mut buf, Some(1));

        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(text.starts_with(" All   Past   Upcoming "));
        assert_eq!(buf[(7, 0)].bg, Color::Blue);
        assert_eq!(buf[(1, 0)].bg, Color::DarkGray);
    }
}
