// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme_at, grapheme_count, unicode_width_of_slice,
};

pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// Single-line text input. The cursor counts grapheme clusters.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    placeholder: String,
    character_index: usize,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(placeholder: impl ToString) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            character_index: 0,
            _phantom_s: std::marker::PhantomData,
            _phantom_a: std::marker::PhantomData,
        }
    }

    pub fn set_placeholder(&mut self, placeholder: impl ToString) {
        self.placeholder = placeholder.to_string();
    }

    /// Moves the cursor behind the current value.
    pub fn reset(&mut self, store: &RefCell<S>) {
        self.character_index = grapheme_count(&A::get(store));
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        let paragraph = match v.is_empty() {
            true => {
                let style = Style::new().dark_gray().italic();
                Paragraph::new(self.placeholder.as_str()).style(style)
            }
            false => Paragraph::new(v.as_str()),
        };
        paragraph.render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let v = A::get(store);
        let width = unicode_width_of_slice(v.as_str(), self.character_index) as u16;
        let x = area.x + width.min(area.width.saturating_sub(1));
        Some((x, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        let len = grapheme_count(&A::get(store));
        self.character_index = self.character_index.min(len);
        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < len => self.character_index += 1,
            Home => self.character_index = 0,
            End => self.character_index = len,
            Backspace if self.character_index > 0 => {
                let mut v = A::get(store);
                if let Some(range) = byte_range_of_grapheme_at(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index -= 1;
                    }
                }
            }
            Delete => {
                let mut v = A::get(store);
                if let Some(range) = byte_range_of_grapheme_at(&v, self.character_index) {
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                }
            }
            Char(c) => {
                let mut v = A::get(store);
                let byte_index = byte_offset_of_grapheme(&v, self.character_index);
                v.insert(byte_index, c);
                // a combining mark joins the previous cluster
                let index = grapheme_count(&v[..byte_index + c.len_utf8()]);
                if A::set(dispatcher, v) {
                    self.character_index = index;
                }
            }
            Left | Right | Backspace => {}
            _ => return None,
        };

        // Always update the cursor position for simplicity
        Some(Message::CursorUpdated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::tui::dispatcher::Action;
    use daycal_core::Action as CalendarAction;

    struct TextAccess;

    impl Access<String, String> for TextAccess {
        fn get(store: &RefCell<String>) -> String {
            store.borrow().clone()
        }

        fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
            dispatcher.dispatch(Action::Calendar(CalendarAction::UpdateTitle(value)));
            true
        }
    }

    fn setup(value: &str) -> (Rc<RefCell<String>>, Dispatcher, Input<String, TextAccess>) {
        let store = Rc::new(RefCell::new(value.to_string()));
        let mut dispatcher = Dispatcher::new();
        let that = store.clone();
        dispatcher.register(Rc::new(RefCell::new(move |action: &Action| {
            if let Action::Calendar(CalendarAction::UpdateTitle(v)) = action {
                *that.borrow_mut() = v.clone();
            }
        })));

        let mut input = Input::new("Enter event title");
        input.reset(&store);
        (store, dispatcher, input)
    }

    fn press(
        input: &mut Input<String, TextAccess>,
        dispatcher: &mut Dispatcher,
        store: &RefCell<String>,
        code: KeyCode,
    ) -> Option<Message> {
        let area = Rect::new(0, 0, 20, 1);
        input.on_key(dispatcher, store, area, KeyEvent::from(code))
    }

    #[test]
    fn types_at_cursor() {
        let (store, mut dispatcher, mut input) = setup("Meting");
        for _ in 0..4 {
            press(&mut input, &mut dispatcher, &store, KeyCode::Left);
        }
        press(&mut input, &mut dispatcher, &store, KeyCode::Char('e'));
        assert_eq!(*store.borrow(), "Meeting");
        assert_eq!(input.character_index, 3);
    }

    #[test]
    fn edits_by_grapheme() {
        let (store, mut dispatcher, mut input) = setup("a中😀");
        press(&mut input, &mut dispatcher, &store, KeyCode::Backspace);
        assert_eq!(*store.borrow(), "a中");

        press(&mut input, &mut dispatcher, &store, KeyCode::Home);
        press(&mut input, &mut dispatcher, &store, KeyCode::Delete);
        assert_eq!(*store.borrow(), "中");
        assert_eq!(input.character_index, 0);

        press(&mut input, &mut dispatcher, &store, KeyCode::End);
        assert_eq!(input.character_index, 1);
    }

    #[test]
    fn cursor_follows_display_width() {
        let (store, _dispatcher, input) = setup("中文");
        let area = Rect::new(3, 4, 20, 1);
        assert_eq!(input.get_cursor_position(&store, area), Some((7, 4)));
    }

    #[test]
    fn ignores_unrelated_keys() {
        let (store, mut dispatcher, mut input) = setup("");
        let msg = press(&mut input, &mut dispatcher, &store, KeyCode::Tab);
        assert_eq!(msg, None);
        let msg = press(&mut input, &mut dispatcher, &store, KeyCode::Left);
        assert_eq!(msg, Some(Message::CursorUpdated));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let (store, _dispatcher, input) = setup("");
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        input.render(&store, area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "E");
        assert_eq!(buf[(0, 0)].fg, Color::DarkGray);
    }
}
