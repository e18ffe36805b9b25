use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::styles::key_maps_help_bar::{DESCRIPTION_STYLE, KEY_ID_STYLE};

use super::key_maps::KeyMaps;

/// Single-line summary of the active key maps. Entries that do not fit are
/// dropped from the end.
pub struct KeyMapsHelpBar<'a> {
    key_maps: &'a KeyMaps,
    style: Style,
}

impl<'a> KeyMapsHelpBar<'a> {
    pub fn new(key_maps: &'a KeyMaps) -> Self {
        KeyMapsHelpBar {
            key_maps,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for KeyMapsHelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut line = Line::default();
        for key_map in self.key_maps.grouped() {
            let spans = vec![
                Span::from("["),
                Span::from(key_map.key_ids_to_string()).style(KEY_ID_STYLE),
                Span::from(": "),
                Span::from(key_map.description.desc).style(DESCRIPTION_STYLE),
                Span::from("] "),
            ];
            if line.width() + spans_width(&spans) > area.width as usize {
                break;
            }
            for span in spans {
                line.push_span(span);
            }
        }

        let line = line.alignment(Alignment::Center).style(self.style);
        line.render(area, buf);
    }
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

#[cfg(test)]
mod test {
    use crossterm::event::KeyCode;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::KeyMapsHelpBar;
    use crate::{
        styles::key_maps_help_bar::{DESCRIPTION_STYLE, KEY_ID_STYLE},
        widgets::{KeyDesc, KeyId, KeyMaps},
    };

    #[test]
    fn test_render_centered() {
        let key_maps = KeyMaps::from([(KeyId::from('q'), KeyDesc::from("quit"))]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));

        KeyMapsHelpBar::new(&key_maps).render(buf.area, &mut buf);

        let mut expected = Buffer::with_lines(vec!["     [q: quit]      "]);
        expected.set_style(Rect::new(6, 0, 1, 1), KEY_ID_STYLE);
        expected.set_style(Rect::new(9, 0, 4, 1), DESCRIPTION_STYLE);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_entries_that_do_not_fit_are_dropped() {
        let key_maps = KeyMaps::from([
            (KeyId::from(KeyCode::Enter), KeyDesc::from("animate").prio(-1)),
            (KeyId::from('q'), KeyDesc::from("quit")),
        ]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 17, 1));

        KeyMapsHelpBar::new(&key_maps).render(buf.area, &mut buf);

        let mut expected = Buffer::with_lines(vec!["[Enter: animate] "]);
        expected.set_style(Rect::new(1, 0, 5, 1), KEY_ID_STYLE);
        expected.set_style(Rect::new(8, 0, 7, 1), DESCRIPTION_STYLE);
        assert_eq!(buf, expected);
    }
}
