use std::sync::mpsc::Sender;
use std::sync::{Arc, RwLock};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lineform_rs::bits;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    Frame,
};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    config::Config,
    styles::root::{TITLE_STYLE, VERSION_STYLE},
    threads::{
        animator::{self, Request},
        RendererMessage,
    },
    widgets::{KeyDesc, KeyId, KeyMaps, KeyMapsHelpBar},
};

use super::{models::WaveSpec, BitInput, ErrorBox, InfoWindow, SchemeSelector, WaveViewer};

const SCHEME_SELECTOR_WIDTH: u16 = 28;
const INPUT_ROW_HEIGHT: u16 = 3;

pub struct Root {
    renderer_channel: Sender<RendererMessage>,
    animator_channel: Sender<Request>,
    bit_input: Arc<RwLock<BitInput>>,
    scheme_selector: Arc<RwLock<SchemeSelector>>,
    wave_viewer: WaveViewer,
    info_window: Arc<RwLock<InfoWindow>>,
    error_box: Arc<RwLock<ErrorBox>>,
    focus: Focus,
    popup: Option<Popup>,
    playback_id: u64,
    key_maps: KeyMaps,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Focus {
    BitInput,
    SchemeSelector,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Popup {
    Info,
    Error,
}

impl Root {
    pub fn new(
        config: &Config,
        renderer_channel: Sender<RendererMessage>,
        animator_channel: Sender<Request>,
    ) -> Self {
        let bit_input = BitInput::new(&config.bits, renderer_channel.clone());
        let scheme_selector = SchemeSelector::new(config.scheme, renderer_channel.clone());
        let mut root = Self {
            bit_input: Arc::new(RwLock::new(bit_input)),
            scheme_selector: Arc::new(RwLock::new(scheme_selector)),
            wave_viewer: WaveViewer::new(config.bit_width, config.amplitude),
            info_window: Arc::new(RwLock::new(InfoWindow::new(renderer_channel.clone()))),
            error_box: Arc::new(RwLock::new(ErrorBox::new(renderer_channel.clone()))),
            renderer_channel,
            animator_channel,
            focus: Focus::BitInput,
            popup: None,
            playback_id: 0,
            key_maps: Self::create_key_maps(),
        };
        root.set_focus(Focus::BitInput);
        root
    }

    /// Validates the typed bit stream and, if it is well formed, starts
    /// animating its encoding with the selected scheme. A malformed stream
    /// clears the plot and raises the error popup instead.
    pub fn animate(&mut self) {
        self.stop_animation();
        let text = self.bit_input.read().unwrap().text().to_string();
        let scheme = self.scheme_selector.read().unwrap().selected_scheme();
        match bits::parse(&text) {
            Ok(bits) => {
                let wave_spec = WaveSpec::new(bits, scheme);
                let frames = wave_spec.frame_count();
                tracing::info!(bits = %text, %scheme, frames, "animating encoding");
                self.wave_viewer.set_wave_spec(Some(wave_spec));
                self.playback_id += 1;
                self.animator_channel
                    .send(Request::Start {
                        playback_id: self.playback_id,
                        frames,
                    })
                    .unwrap();
            }
            Err(e) => {
                tracing::warn!(bits = %text, "rejected bit stream: {e}");
                self.wave_viewer.set_wave_spec(None);
                self.error_box.write().unwrap().set_message(&e.reason());
                self.popup = Some(Popup::Error);
            }
        }
        self.notify_render();
    }

    fn stop_animation(&mut self) {
        // frames still in flight for the old playback are dropped by id
        self.playback_id += 1;
        self.animator_channel.send(Request::Stop).unwrap();
    }

    fn create_key_maps() -> KeyMaps {
        KeyMaps::from([
            (KeyId::from(KeyCode::Tab), KeyDesc::from("switch field").prio(1)),
            (KeyId::from(KeyCode::BackTab), KeyDesc::from("switch field").prio(1)),
            (
                KeyId::from((KeyCode::Char('a'), KeyModifiers::CONTROL)),
                KeyDesc::from("animate").prio(-1),
            ),
            (KeyId::from(KeyCode::F(1)), KeyDesc::from("encoding guide").prio(2)),
            (
                KeyId::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
                KeyDesc::from("quit").prio(3),
            ),
        ])
    }

    fn focus_key_maps(&self) -> KeyMaps {
        let mut key_maps = self.key_maps.clone();
        match self.focus {
            Focus::BitInput => {
                key_maps.insert(KeyId::from(KeyCode::Enter), KeyDesc::from("animate").prio(-1));
            }
            Focus::SchemeSelector => {
                key_maps.insert(KeyId::from('?'), KeyDesc::from("encoding guide").prio(2));
                key_maps.insert(KeyId::from('q'), KeyDesc::from("quit").prio(3));
            }
        }
        key_maps
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.bit_input
            .write()
            .unwrap()
            .set_focused(focus == Focus::BitInput);
        self.scheme_selector
            .write()
            .unwrap()
            .set_focused(focus == Focus::SchemeSelector);
    }

    fn toggle_focus(&mut self) {
        match self.focus {
            Focus::BitInput => self.set_focus(Focus::SchemeSelector),
            Focus::SchemeSelector => self.set_focus(Focus::BitInput),
        }
    }

    fn open_info(&mut self) {
        self.popup = Some(Popup::Info);
    }

    fn notify_render(&self) {
        self.renderer_channel.send(RendererMessage::Render).unwrap();
    }

    fn notify_quit(&self) {
        tracing::info!("quit requested");
        self.renderer_channel.send(RendererMessage::Quit).unwrap();
    }

    fn render_title(f: &mut Frame, rect: Rect) {
        let title = Line::from(vec![
            Span::styled("Line Encoding Visualizer ", TITLE_STYLE),
            Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), VERSION_STYLE),
        ])
        .centered();
        f.render_widget(title, rect);
    }
}

impl Component for Root {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical(vec![
            Constraint::Length(1),
            Constraint::Length(INPUT_ROW_HEIGHT),
            Constraint::Length(self.wave_viewer.height()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(rect);
        let input_row = Layout::horizontal(vec![
            Constraint::Min(0),
            Constraint::Length(SCHEME_SELECTOR_WIDTH),
        ])
        .split(rows[1]);

        Self::render_title(f, rows[0]);
        self.bit_input.write().unwrap().render(f, input_row[0]);
        self.wave_viewer.render(f, rows[2]);
        let key_maps = self.get_key_mappings();
        f.render_widget(KeyMapsHelpBar::new(&key_maps), rows[4]);
        self.scheme_selector.write().unwrap().render(f, input_row[1]);

        match self.popup {
            Some(Popup::Info) => self.info_window.write().unwrap().render(f, rect),
            Some(Popup::Error) => self.error_box.write().unwrap().render(f, rect),
            None => (),
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.notify_quit();
                return HandleResult::Handled;
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.animate();
                return HandleResult::Handled;
            }
            (KeyCode::Enter, _) if self.focus == Focus::BitInput => {
                self.animate();
                return HandleResult::Handled;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => self.toggle_focus(),
            (KeyCode::F(1) | KeyCode::Char('?'), _) => self.open_info(),
            (KeyCode::Char('q'), _) => {
                self.notify_quit();
                return HandleResult::Handled;
            }
            _ => return HandleResult::NotHandled,
        }
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_resize_event(&mut self, _: u16, _: u16) -> HandleResult {
        self.notify_render();
        HandleResult::Handled
    }

    fn handle_focus_gained(&mut self) {
        self.popup = None;
        self.notify_render();
    }

    fn get_focused_child(&self) -> Option<SharedComponent> {
        match (self.popup, self.focus) {
            (Some(Popup::Error), _) => Some(self.error_box.clone()),
            (Some(Popup::Info), _) => Some(self.info_window.clone()),
            (None, Focus::BitInput) => Some(self.bit_input.clone()),
            (None, Focus::SchemeSelector) => Some(self.scheme_selector.clone()),
        }
    }

    fn get_key_mappings(&self) -> KeyMaps {
        let child_key_maps = self
            .get_focused_child()
            .map(|child| child.read().unwrap().get_key_mappings())
            .unwrap_or_default();
        if self.popup.is_some() {
            child_key_maps
        } else {
            KeyMaps::merge_mappings(&child_key_maps, &self.focus_key_maps())
        }
    }
}

impl animator::Listener for Root {
    fn on_frame(&mut self, playback_id: u64, frame: usize) {
        if playback_id == self.playback_id {
            self.wave_viewer.set_frame(frame);
        }
    }
}
