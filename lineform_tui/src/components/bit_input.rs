use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    styles::global::{FOCUSED_BORDER_STYLE, NORMAL_BORDER_STYLE},
    threads::RendererMessage,
    widgets::{KeyDesc, KeyId, KeyMaps, LineEdit, LineEditState},
};

/// Text field holding the bit stream to encode. Any character is accepted
/// here; the stream is validated when an animation is requested.
pub struct BitInput {
    renderer_channel: Sender<RendererMessage>,
    state: LineEditState,
    is_focused: bool,
    key_maps: KeyMaps,
}

impl BitInput {
    pub fn new(text: &str, renderer_channel: Sender<RendererMessage>) -> Self {
        Self {
            renderer_channel,
            state: LineEditState::from(text),
            is_focused: false,
            key_maps: Self::create_key_maps(),
        }
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn set_focused(&mut self, is_focused: bool) {
        self.is_focused = is_focused;
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::from([
            (KeyId::from(KeyCode::Left), KeyDesc::from("move cursor")),
            (KeyId::from(KeyCode::Right), KeyDesc::from("move cursor")),
            (KeyId::from(KeyCode::Backspace), KeyDesc::from("erase")),
            (KeyId::from(KeyCode::Delete), KeyDesc::from("erase")),
        ])
    }

    fn notify_render(&self) {
        self.renderer_channel.send(RendererMessage::Render).unwrap();
    }
}

impl Component for BitInput {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.is_focused {
            FOCUSED_BORDER_STYLE
        } else {
            NORMAL_BORDER_STYLE
        };
        let block = Block::bordered()
            .title(" Bit stream ")
            .border_style(border_style);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        let line_edit = LineEdit::default().show_cursor(self.is_focused);
        f.render_stateful_widget(line_edit, inner, &mut self.state);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return HandleResult::NotHandled;
        }
        match key_event.code {
            KeyCode::Char(ch) => self.state.put(ch),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Delete => self.state.delete(),
            KeyCode::Left => self.state.move_cursor_left(),
            KeyCode::Right => self.state.move_cursor_right(),
            KeyCode::Home => self.state.move_cursor_home(),
            KeyCode::End => self.state.move_cursor_end(),
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
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
