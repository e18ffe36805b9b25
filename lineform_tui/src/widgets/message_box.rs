use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

/// A message with a single dismiss button centred on its last row.
pub struct MessageBox<'a> {
    text: &'a Paragraph<'a>,
    button_text: &'a str,
    button_style: Style,
}

impl<'a> MessageBox<'a> {
    pub fn new(text: &'a Paragraph<'a>) -> Self {
        Self {
            text,
            button_text: "Close",
            button_style: Style::default(),
        }
    }

    pub fn button_text(mut self, text: &'a str) -> Self {
        self.button_text = text;
        self
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }
}

impl Widget for MessageBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical(vec![
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
        self.text.render(chunks[0], buf);

        let button = format!(" {} ", self.button_text);
        let button_area = chunks[2];
        let button_width = usize::min(button.chars().count(), button_area.width as usize) as u16;
        let x = button_area.x + (button_area.width - button_width) / 2;
        buf.set_stringn(
            x,
            button_area.y,
            button,
            button_width as usize,
            self.button_style,
        );
    }
}
