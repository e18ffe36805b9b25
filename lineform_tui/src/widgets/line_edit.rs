use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};

use crate::styles::line_edit::{TEXT_CURSOR_STYLE, TEXT_STYLE};

/// Single-line text field. The view scrolls horizontally to keep the cursor
/// visible.
#[derive(Default)]
pub struct LineEdit {
    show_cursor: bool,
}

#[derive(Default, Debug, Clone)]
pub struct LineEditState {
    text: String,
    cursor_position: usize,
    start_position: usize,
}

impl LineEdit {
    pub fn show_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

impl StatefulWidget for LineEdit {
    type State = LineEditState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let viewport_length = area.width as usize;
        if viewport_length == 0 || area.height == 0 {
            return;
        }
        state.scroll_to_cursor(viewport_length);

        let visible: String = state
            .text
            .chars()
            .skip(state.start_position)
            .take(viewport_length)
            .collect();
        buf.set_stringn(area.x, area.y, visible, viewport_length, TEXT_STYLE);

        if self.show_cursor {
            let x = area.x + (state.cursor_position - state.start_position) as u16;
            buf.set_style(Rect::new(x, area.y, 1, 1), TEXT_CURSOR_STYLE);
        }
    }
}

impl From<&str> for LineEditState {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor_position: text.chars().count(),
            start_position: 0,
        }
    }
}

impl LineEditState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
        self.start_position = 0;
    }

    pub fn put(&mut self, ch: char) {
        let idx = get_utf8_index(&self.text, self.cursor_position).unwrap_or(self.text.len());
        self.text.insert(idx, ch);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        if let Some(idx) = get_utf8_index(&self.text, self.cursor_position - 1) {
            self.text.remove(idx);
            self.cursor_position -= 1;
        }
    }

    pub fn delete(&mut self) {
        if let Some(idx) = get_utf8_index(&self.text, self.cursor_position) {
            self.text.remove(idx);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The cursor may sit one past the last character, so it needs a cell of
    /// its own.
    fn scroll_to_cursor(&mut self, viewport_length: usize) {
        if self.cursor_position < self.start_position {
            self.start_position = self.cursor_position;
        } else if self.cursor_position >= self.start_position + viewport_length {
            self.start_position = self.cursor_position + 1 - viewport_length;
        }
    }
}

fn get_utf8_index(s: &str, ch_idx: usize) -> Option<usize> {
    s.char_indices().nth(ch_idx).map(|(i, _)| i)
}

#[cfg(test)]
mod test {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

    use super::{LineEdit, LineEditState};
    use crate::styles::line_edit::{TEXT_CURSOR_STYLE, TEXT_STYLE};

    #[test]
    fn test_editing() {
        let mut state = LineEditState::from("0110");
        assert_eq!(state.cursor_position(), 4);

        state.backspace();
        assert_eq!(state.text(), "011");

        state.move_cursor_home();
        state.put('1');
        assert_eq!(state.text(), "1011");
        assert_eq!(state.cursor_position(), 1);

        state.delete();
        assert_eq!(state.text(), "111");

        state.move_cursor_end();
        state.delete();
        state.move_cursor_right();
        assert_eq!(state.text(), "111");
        assert_eq!(state.cursor_position(), 3);

        state.clear();
        state.backspace();
        state.move_cursor_left();
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn test_render_with_cursor() {
        let mut state = LineEditState::from("0101");
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));

        LineEdit::default()
            .show_cursor(true)
            .render(buf.area, &mut buf, &mut state);

        let mut expected = Buffer::with_lines(vec!["0101  "]);
        expected.set_style(Rect::new(0, 0, 4, 1), TEXT_STYLE);
        expected.set_style(Rect::new(4, 0, 1, 1), TEXT_CURSOR_STYLE);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut state = LineEditState::from("0011001100");
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));

        LineEdit::default().render(buf.area, &mut buf, &mut state);

        let mut expected = Buffer::with_lines(vec!["1100 "]);
        expected.set_style(Rect::new(0, 0, 4, 1), TEXT_STYLE);
        assert_eq!(buf, expected);

        state.move_cursor_home();
        LineEdit::default().render(buf.area, &mut buf, &mut state);

        let mut expected = Buffer::with_lines(vec!["00110"]);
        expected.set_style(Rect::new(0, 0, 5, 1), TEXT_STYLE);
        assert_eq!(buf, expected);
    }
}
