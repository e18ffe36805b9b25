use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lineform_rs::Scheme;
use ratatui::{layout::Rect, widgets::Block, Frame};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    styles::global::{FOCUSED_BORDER_STYLE, NORMAL_BORDER_STYLE},
    threads::RendererMessage,
    widgets::{DropDown, DropDownState, KeyDesc, KeyId, KeyMaps},
};

pub struct SchemeSelector {
    renderer_channel: Sender<RendererMessage>,
    state: DropDownState,
    is_focused: bool,
    closed_key_maps: KeyMaps,
    opened_key_maps: KeyMaps,
}

impl SchemeSelector {
    pub fn new(scheme: Scheme, renderer_channel: Sender<RendererMessage>) -> Self {
        let names = Scheme::ALL.iter().map(|s| s.name().to_string()).collect();
        let mut state = DropDownState::new(names);
        let idx = Scheme::ALL.iter().position(|s| *s == scheme).unwrap_or_default();
        state.select(idx);
        Self {
            renderer_channel,
            state,
            is_focused: false,
            closed_key_maps: KeyMaps::from([(
                KeyId::from(KeyCode::Enter),
                KeyDesc::from("choose scheme"),
            )]),
            opened_key_maps: KeyMaps::from([
                (KeyId::from(KeyCode::Up), KeyDesc::from("move selection")),
                (KeyId::from(KeyCode::Down), KeyDesc::from("move selection")),
                (KeyId::from(KeyCode::Enter), KeyDesc::from("confirm")),
                (KeyId::from(KeyCode::Esc), KeyDesc::from("cancel")),
            ]),
        }
    }

    pub fn selected_scheme(&self) -> Scheme {
        Scheme::ALL[self.state.selected_index()]
    }

    pub fn is_opened(&self) -> bool {
        self.state.is_opened()
    }

    pub fn set_focused(&mut self, is_focused: bool) {
        self.is_focused = is_focused;
        if !is_focused {
            self.state.close();
        }
    }

    fn notify_render(&self) {
        self.renderer_channel.send(RendererMessage::Render).unwrap();
    }

    fn handle_opened_key_event(&mut self, key_event: &KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.down(),
            KeyCode::Enter => {
                self.state.confirm();
                tracing::info!(scheme = %self.selected_scheme(), "scheme selected");
            }
            KeyCode::Esc => self.state.close(),
            _ => (),
        }
    }
}

impl Component for SchemeSelector {
    /// When opened, the list extends below `rect`, so this must be drawn after
    /// whatever lies underneath.
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.is_focused {
            FOCUSED_BORDER_STYLE
        } else {
            NORMAL_BORDER_STYLE
        };
        let block = Block::bordered()
            .title(" Scheme ")
            .border_style(border_style);
        f.render_stateful_widget(DropDown::default().block(block), rect, &mut self.state);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return HandleResult::NotHandled;
        }
        if self.state.is_opened() {
            self.handle_opened_key_event(key_event);
        } else {
            match key_event.code {
                KeyCode::Enter | KeyCode::Down => self.state.open(),
                _ => return HandleResult::NotHandled,
            }
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
        if self.state.is_opened() {
            self.opened_key_maps.clone()
        } else {
            self.closed_key_maps.clone()
        }
    }
}
