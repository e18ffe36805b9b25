use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lineform_rs::Scheme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    styles::info_window::{HEADING_STYLE, RULE_STYLE, SCHEME_STYLE},
    threads::RendererMessage,
    utils,
    widgets::{KeyDesc, KeyId, KeyMaps},
};

const MAX_WIDTH: u16 = 64;

/// Popup describing how every scheme puts bits on the line.
pub struct InfoWindow {
    renderer_channel: Sender<RendererMessage>,
    lines: Vec<Line<'static>>,
    scroll: u16,
    key_maps: KeyMaps,
}

impl InfoWindow {
    pub fn new(renderer_channel: Sender<RendererMessage>) -> Self {
        Self {
            renderer_channel,
            lines: Self::guide_lines(),
            scroll: 0,
            key_maps: Self::create_key_maps(),
        }
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::from([
            (KeyId::from(KeyCode::Up), KeyDesc::from("scroll")),
            (KeyId::from(KeyCode::Down), KeyDesc::from("scroll")),
            (KeyId::from(KeyCode::Esc), KeyDesc::from("close guide")),
            (KeyId::from(KeyCode::Enter), KeyDesc::from("close guide")),
            (KeyId::from('q'), KeyDesc::from("close guide")),
        ])
    }

    fn guide_lines() -> Vec<Line<'static>> {
        let mut lines = vec![];
        for scheme in Scheme::ALL {
            let mut heading = vec![Span::styled(scheme.name(), SCHEME_STYLE)];
            if scheme.long_name() != scheme.name() {
                heading.push(Span::styled(format!(" ({})", scheme.long_name()), HEADING_STYLE));
            }
            lines.push(Line::from(heading));
            for rule in scheme.rules() {
                lines.push(Line::styled(format!("  • {rule}"), RULE_STYLE));
            }
            lines.push(Line::default());
        }
        lines.pop();
        lines
    }

    fn scroll_down(&mut self) {
        let last = self.lines.len().saturating_sub(1) as u16;
        self.scroll = u16::min(self.scroll + 1, last);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn notify_render(&self) {
        self.renderer_channel.send(RendererMessage::Render).unwrap();
    }
}

impl Component for InfoWindow {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let width = u16::min(rect.width, MAX_WIDTH);
        let height = u16::min(rect.height, self.lines.len() as u16 + 2);
        let area = utils::layout::get_popup_area_centered(rect, width, height);
        let block = Block::bordered()
            .title(" Encoding Techniques Guide ")
            .title_alignment(Alignment::Center)
            .title_style(HEADING_STYLE)
            .border_type(BorderType::Rounded);
        let paragraph = Paragraph::new(self.lines.clone())
            .block(block)
            .scroll((self.scroll, 0));
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return HandleResult::NotHandled;
        }
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::F(1) => {
                self.scroll = 0;
                return HandleResult::ReleaseFocus;
            }
            _ => (),
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
