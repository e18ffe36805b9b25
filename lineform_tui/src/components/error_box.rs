use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    styles::error_box::{BORDER_STYLE, BUTTON_STYLE, TITLE_STYLE},
    threads::RendererMessage,
    utils,
    widgets::{KeyDesc, KeyId, KeyMaps, MessageBox},
};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 8;

/// Modal error popup. Every key other than the dismiss keys is swallowed
/// while it is shown.
pub struct ErrorBox {
    renderer_channel: Sender<RendererMessage>,
    message: String,
    key_maps: KeyMaps,
}

impl ErrorBox {
    pub fn new(renderer_channel: Sender<RendererMessage>) -> Self {
        Self {
            renderer_channel,
            message: String::new(),
            key_maps: KeyMaps::from([
                (KeyId::from(KeyCode::Enter), KeyDesc::from("close")),
                (KeyId::from(KeyCode::Esc), KeyDesc::from("close")),
            ]),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn notify_render(&self) {
        self.renderer_channel.send(RendererMessage::Render).unwrap();
    }
}

impl Component for ErrorBox {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = u16::min(rect.width, WIDTH);
        let height = u16::min(rect.height, HEIGHT);
        let area = utils::layout::get_popup_area_centered(rect, width, height);
        let block = Block::bordered()
            .title(" Error ")
            .title_alignment(Alignment::Center)
            .title_style(TITLE_STYLE)
            .border_style(BORDER_STYLE);
        let inner = block.inner(area);
        let text = Paragraph::new(&self.message[..])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, area);
        f.render_widget(block, area);
        f.render_widget(MessageBox::new(&text).button_style(BUTTON_STYLE), inner);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => HandleResult::NotHandled,
            (KeyCode::Enter | KeyCode::Esc, _) => {
                self.notify_render();
                HandleResult::ReleaseFocus
            }
            _ => HandleResult::Handled,
        }
    }

    fn handle_resize_event(&mut self, _: u16, _: u16) -> HandleResult {
        HandleResult::NotHandled
    }

    fn handle_focus_gained(&mut self) {}

    fn get_focused_child(&self) -> Option<SharedComponent> {
        None
    }

    fn get_key_mappings(&self) -> KeyMaps {
        self.key_maps.clone()
    }
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::ErrorBox;
    use crate::component::{Component, HandleResult};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_blocks_other_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut error_box = ErrorBox::new(tx);
        error_box.set_message("bit stream is empty");

        for code in [KeyCode::Char('q'), KeyCode::Tab, KeyCode::F(1)] {
            assert_eq!(
                error_box.handle_event(&press(code, KeyModifiers::NONE)),
                HandleResult::Handled
            );
        }
        assert_eq!(
            error_box.handle_event(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            HandleResult::Handled
        );
        assert_eq!(error_box.message(), "bit stream is empty");
    }

    #[test]
    fn test_dismiss() {
        let (tx, rx) = mpsc::channel();
        let mut error_box = ErrorBox::new(tx);

        assert_eq!(
            error_box.handle_event(&press(KeyCode::Enter, KeyModifiers::NONE)),
            HandleResult::ReleaseFocus
        );
        assert_eq!(
            error_box.handle_event(&press(KeyCode::Esc, KeyModifiers::NONE)),
            HandleResult::ReleaseFocus
        );
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_quit_passes_through() {
        let (tx, _rx) = mpsc::channel();
        let mut error_box = ErrorBox::new(tx);
        assert_eq!(
            error_box.handle_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            HandleResult::NotHandled
        );
    }
}
