use lineform_rs::{Level, Waveform as LineWaveform};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::BlockExt,
    style::Style,
    widgets::{Block, Widget},
};

/// Box-drawing plot of a line signal.
///
/// Each bit period spans `bit_width` columns. The signal occupies
/// `2 * amplitude + 1` rows: `+1` on the first, `0` on row `amplitude` and
/// `-1` on the last. Only the part of the signal before `reveal_time` is
/// drawn; the zero line always spans the whole duration.
pub struct Waveform<'a> {
    waveform: &'a LineWaveform,
    bit_width: u16,
    amplitude: u16,
    reveal_time: f64,
    style: Style,
    zero_line_style: Style,
    block: Option<Block<'a>>,
}

impl<'a> Waveform<'a> {
    pub fn new(waveform: &'a LineWaveform) -> Self {
        Self {
            waveform,
            bit_width: 8,
            amplitude: 2,
            reveal_time: waveform.duration(),
            style: Style::default(),
            zero_line_style: Style::default(),
            block: None,
        }
    }

    pub fn bit_width(mut self, bit_width: u16) -> Self {
        self.bit_width = bit_width;
        self
    }

    pub fn amplitude(mut self, amplitude: u16) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn reveal_time(mut self, reveal_time: f64) -> Self {
        self.reveal_time = reveal_time;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn zero_line_style(mut self, style: Style) -> Self {
        self.zero_line_style = style;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn height(amplitude: u16) -> u16 {
        2 * amplitude + 1
    }

    fn row(&self, level: Level) -> u16 {
        match level {
            Level::Positive => 0,
            Level::Zero => self.amplitude,
            Level::Negative => 2 * self.amplitude,
        }
    }

    fn to_column(&self, time: f64) -> usize {
        (time * self.bit_width as f64).round() as usize
    }

    /// Level drawn in each column, `None` where the signal is not revealed.
    fn columns(&self) -> Vec<Option<Level>> {
        let mut columns = vec![None; self.to_column(self.waveform.duration())];
        let revealed = self.to_column(self.reveal_time);
        for segment in self.waveform.segments() {
            let start = self.to_column(segment.start);
            let end = usize::min(self.to_column(segment.end), revealed);
            for column in columns.iter_mut().take(end).skip(start) {
                *column = Some(segment.level);
            }
        }
        columns
    }
}

impl Widget for Waveform<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(block) = &self.block {
            block.clone().render(area, buf);
        }
        let area = self.block.inner_if_some(area);
        let columns = self.columns();
        let mut put = |x: usize, y: u16, symbol: &str, style: Style| {
            if x >= area.width as usize || y >= area.height {
                return;
            }
            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        };

        for x in 0..columns.len() {
            put(x, self.amplitude, "┈", self.zero_line_style);
        }

        let mut previous: Option<Level> = None;
        for (x, level) in columns.iter().enumerate() {
            let Some(level) = *level else {
                previous = None;
                continue;
            };
            let to = self.row(level);
            match previous {
                Some(previous) if previous != level => {
                    let from = self.row(previous);
                    let (top, bottom) = if from < to {
                        put(x, from, "┐", self.style);
                        put(x, to, "└", self.style);
                        (from, to)
                    } else {
                        put(x, from, "┘", self.style);
                        put(x, to, "┌", self.style);
                        (to, from)
                    };
                    for y in top + 1..bottom {
                        put(x, y, "│", self.style);
                    }
                }
                _ => put(x, to, "─", self.style),
            }
            previous = Some(level);
        }
    }
}

#[cfg(test)]
mod test {
    use lineform_rs::{bits, encode, Scheme};
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        widgets::{Block, Widget},
    };

    use super::Waveform;

    fn render(
        scheme: Scheme,
        bits: &str,
        width: u16,
        amplitude: u16,
        reveal: Option<f64>,
    ) -> Buffer {
        let bits = bits::parse(bits).unwrap();
        let waveform = encode(scheme, &bits);
        let area = Rect::new(0, 0, width, Waveform::height(amplitude));
        let mut buf = Buffer::empty(area);
        let mut widget = Waveform::new(&waveform)
            .bit_width(width / bits.len() as u16)
            .amplitude(amplitude);
        if let Some(reveal) = reveal {
            widget = widget.reveal_time(reveal);
        }
        widget.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_render_nrz_l() {
        let buf = render(Scheme::NrzL, "01", 8, 1, None);
        let expected = Buffer::with_lines(vec![
            "    ┌───", //
            "┈┈┈┈│┈┈┈",
            "────┘   ",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_partially_revealed() {
        let buf = render(Scheme::NrzL, "01", 8, 1, Some(1.0));
        let expected = Buffer::with_lines(vec![
            "        ", //
            "┈┈┈┈┈┈┈┈",
            "────    ",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_nothing_revealed() {
        let buf = render(Scheme::Manchester, "1", 4, 1, Some(0.0));
        let expected = Buffer::with_lines(vec![
            "    ", //
            "┈┈┈┈",
            "    ",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_manchester() {
        let buf = render(Scheme::Manchester, "10", 8, 1, None);
        let expected = Buffer::with_lines(vec![
            "  ┌───┐ ", //
            "┈┈│┈┈┈│┈",
            "──┘   └─",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_zero_level() {
        let buf = render(Scheme::BipolarAmi, "10", 4, 1, None);
        let expected = Buffer::with_lines(vec![
            "──┐ ", //
            "┈┈└─",
            "    ",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_tall_transition() {
        let buf = render(Scheme::NrzL, "10", 4, 2, None);
        let expected = Buffer::with_lines(vec![
            "──┐ ", //
            "  │ ",
            "┈┈│┈",
            "  │ ",
            "  └─",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_render_inside_block() {
        let bits = bits::parse("1").unwrap();
        let waveform = encode(Scheme::NrzL, &bits);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 5));
        Waveform::new(&waveform)
            .bit_width(2)
            .amplitude(1)
            .block(Block::bordered())
            .render(buf.area, &mut buf);
        let expected = Buffer::with_lines(vec![
            "┌──┐", //
            "│──│",
            "│┈┈│",
            "│  │",
            "└──┘",
        ]);
        assert_eq!(buf, expected);
    }
}
