use bitvec::slice::BitSlice;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Two-row x-axis under a [`super::Waveform`]: a tick at every bit boundary
/// and each bit's value centred in its period.
pub struct BitAxis<'a> {
    bits: &'a BitSlice<u32>,
    bit_width: u16,
    revealed_bits: usize,
    tick_style: Style,
    revealed_style: Style,
    pending_style: Style,
}

impl<'a> BitAxis<'a> {
    pub fn new(bits: &'a BitSlice<u32>) -> Self {
        Self {
            bits,
            bit_width: 8,
            revealed_bits: bits.len(),
            tick_style: Style::default(),
            revealed_style: Style::default(),
            pending_style: Style::default(),
        }
    }

    pub fn bit_width(mut self, bit_width: u16) -> Self {
        self.bit_width = bit_width;
        self
    }

    pub fn revealed_bits(mut self, revealed_bits: usize) -> Self {
        self.revealed_bits = revealed_bits;
        self
    }

    pub fn tick_style(mut self, style: Style) -> Self {
        self.tick_style = style;
        self
    }

    pub fn revealed_style(mut self, style: Style) -> Self {
        self.revealed_style = style;
        self
    }

    pub fn pending_style(mut self, style: Style) -> Self {
        self.pending_style = style;
        self
    }

    pub const HEIGHT: u16 = 2;
}

impl Widget for BitAxis<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.bit_width == 0 {
            return;
        }
        let width = self.bit_width as usize;
        let mut ticks = String::new();
        for _ in 0..self.bits.len() {
            ticks += &format!("┴{0:─<1$}", "", width - 1);
        }
        ticks.push('┴');
        buf.set_stringn(
            area.x,
            area.y,
            ticks,
            area.width as usize,
            self.tick_style,
        );

        if area.height < Self::HEIGHT {
            return;
        }
        for (i, bit) in self.bits.iter().enumerate() {
            let x = i * width + width / 2;
            if x >= area.width as usize {
                break;
            }
            let style = if i < self.revealed_bits {
                self.revealed_style
            } else {
                self.pending_style
            };
            let label = if *bit { "1" } else { "0" };
            buf.set_string(area.x + x as u16, area.y + 1, label, style);
        }
    }
}

#[cfg(test)]
mod test {
    use lineform_rs::bits;
    use ratatui::{
        buffer::Buffer,
        layout::Rect,
        style::{Style, Stylize},
        widgets::Widget,
    };

    use super::BitAxis;

    #[test]
    fn test_render() {
        let bits = bits::parse("01").unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 9, 2));

        BitAxis::new(&bits).bit_width(4).render(buf.area, &mut buf);

        let expected = Buffer::with_lines(vec![
            "┴───┴───┴", //
            "  0   1  ",
        ]);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_revealed_bits_are_highlighted() {
        let bits = bits::parse("101").unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 2));
        let revealed = Style::new().yellow();
        let pending = Style::new().dark_gray();

        BitAxis::new(&bits)
            .bit_width(2)
            .revealed_bits(1)
            .revealed_style(revealed)
            .pending_style(pending)
            .render(buf.area, &mut buf);

        let mut expected = Buffer::with_lines(vec![
            "┴─┴─┴─┴", //
            " 1 0 1 ",
        ]);
        expected.set_style(Rect::new(1, 1, 1, 1), revealed);
        expected.set_style(Rect::new(3, 1, 1, 1), pending);
        expected.set_style(Rect::new(5, 1, 1, 1), pending);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_clipped_to_area() {
        let bits = bits::parse("0110").unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));

        BitAxis::new(&bits).bit_width(4).render(buf.area, &mut buf);

        let expected = Buffer::with_lines(vec![
            "┴───┴─", //
            "  0   ",
        ]);
        assert_eq!(buf, expected);
    }
}
