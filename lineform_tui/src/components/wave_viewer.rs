use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{
    component::{Component, HandleResult, SharedComponent},
    styles::wave_viewer::{
        LEVEL_LABEL_STYLE, PENDING_BIT_STYLE, PLACEHOLDER_STYLE, REVEALED_BIT_STYLE, TITLE_STYLE,
        WAVEFORM_STYLE, ZERO_LINE_STYLE,
    },
    widgets::{BitAxis, KeyMaps, Waveform},
};

use super::models::{fit_bit_width, WaveSpec};

const GUTTER_WIDTH: u16 = 3;

/// Panel plotting the current [`WaveSpec`] up to its revealed frame.
pub struct WaveViewer {
    wave_spec: Option<WaveSpec>,
    bit_width: u16,
    amplitude: u16,
}

impl WaveViewer {
    pub fn new(bit_width: u16, amplitude: u16) -> Self {
        Self {
            wave_spec: None,
            bit_width,
            amplitude,
        }
    }

    pub fn wave_spec(&self) -> Option<&WaveSpec> {
        self.wave_spec.as_ref()
    }

    pub fn set_wave_spec(&mut self, wave_spec: Option<WaveSpec>) {
        self.wave_spec = wave_spec;
    }

    pub fn set_frame(&mut self, frame: usize) {
        if let Some(wave_spec) = self.wave_spec.as_mut() {
            wave_spec.set_frame(frame);
        }
    }

    /// Rows needed to show the whole plot, borders included.
    pub fn height(&self) -> u16 {
        Waveform::height(self.amplitude) + BitAxis::HEIGHT + 2
    }

    fn title(&self) -> String {
        match &self.wave_spec {
            Some(wave_spec) => format!(" {} Encoding ", wave_spec.scheme),
            None => " Encoding ".to_string(),
        }
    }

    fn render_placeholder(f: &mut Frame, rect: Rect) {
        let placeholder = Paragraph::new("Type a bit stream and press Enter to animate")
            .style(PLACEHOLDER_STYLE)
            .alignment(Alignment::Center);
        let rows = Layout::vertical(vec![
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(rect);
        f.render_widget(placeholder, rows[1]);
    }

    fn render_plot(&self, f: &mut Frame, rect: Rect, wave_spec: &WaveSpec) {
        let columns =
            Layout::horizontal(vec![Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
                .split(rect);
        let plot_height = Waveform::height(self.amplitude);
        let rows = |area: Rect| {
            Layout::vertical(vec![
                Constraint::Length(plot_height),
                Constraint::Length(BitAxis::HEIGHT),
                Constraint::Min(0),
            ])
            .split(area)
        };
        let gutter = rows(columns[0]);
        let plot = rows(columns[1]);

        f.render_widget(self.level_labels(), gutter[0]);

        // the closing tick of the axis takes one extra column
        let bit_width = fit_bit_width(
            plot[0].width.saturating_sub(1),
            wave_spec.bits.len(),
            self.bit_width,
        );
        let waveform = Waveform::new(&wave_spec.waveform)
            .bit_width(bit_width)
            .amplitude(self.amplitude)
            .reveal_time(wave_spec.reveal_time())
            .style(WAVEFORM_STYLE)
            .zero_line_style(ZERO_LINE_STYLE);
        f.render_widget(waveform, plot[0]);

        let bit_axis = BitAxis::new(&wave_spec.bits)
            .bit_width(bit_width)
            .revealed_bits(wave_spec.revealed_bits())
            .tick_style(ZERO_LINE_STYLE)
            .revealed_style(REVEALED_BIT_STYLE)
            .pending_style(PENDING_BIT_STYLE);
        f.render_widget(bit_axis, plot[1]);
    }

    fn level_labels(&self) -> Text<'static> {
        let height = Waveform::height(self.amplitude) as usize;
        let mut lines = vec![Line::default(); height];
        lines[0] = Line::from("+1");
        lines[self.amplitude as usize] = Line::from(" 0");
        lines[height - 1] = Line::from("-1");
        Text::from(lines).style(LEVEL_LABEL_STYLE)
    }
}

impl Component for WaveViewer {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::bordered().title(Line::from(self.title()).style(TITLE_STYLE));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        match &self.wave_spec {
            Some(wave_spec) => self.render_plot(f, inner, wave_spec),
            None => Self::render_placeholder(f, inner),
        }
    }

    fn handle_key_event(&mut self, _: &KeyEvent) -> HandleResult {
        HandleResult::NotHandled
    }

    fn handle_resize_event(&mut self, _: u16, _: u16) -> HandleResult {
        HandleResult::NotHandled
    }

    fn handle_focus_gained(&mut self) {}

    fn get_focused_child(&self) -> Option<SharedComponent> {
        None
    }

    fn get_key_mappings(&self) -> KeyMaps {
        KeyMaps::default()
    }
}
