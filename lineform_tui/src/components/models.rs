use lineform_rs::{encode, Bits, Scheme, Waveform};

/// An encoded bit stream together with how much of it the animation has
/// revealed.
#[derive(Clone, Debug)]
pub struct WaveSpec {
    pub bits: Bits,
    pub scheme: Scheme,
    pub waveform: Waveform,
    frame: usize,
}

impl WaveSpec {
    pub fn new(bits: Bits, scheme: Scheme) -> Self {
        let waveform = encode(scheme, &bits);
        Self {
            bits,
            scheme,
            waveform,
            frame: 0,
        }
    }

    /// One frame per vertex, plus the empty frame 0.
    pub fn frame_count(&self) -> usize {
        self.waveform.vertex_count() + 1
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn set_frame(&mut self, frame: usize) {
        self.frame = usize::min(frame, self.frame_count() - 1);
    }

    pub fn reveal_time(&self) -> f64 {
        reveal_time(&self.waveform, self.frame)
    }

    /// Bits whose period has started being drawn.
    pub fn revealed_bits(&self) -> usize {
        usize::min(self.reveal_time().ceil() as usize, self.bits.len())
    }
}

/// Time up to which frame `frame` shows the signal. A step waveform reveals
/// whole bits; a transition waveform reveals up to its `frame`-th vertex.
pub fn reveal_time(waveform: &Waveform, frame: usize) -> f64 {
    match waveform {
        Waveform::Step(w) => usize::min(frame, w.len()) as f64,
        Waveform::Transition(w) => match usize::min(frame, w.len()) {
            0 => 0.0,
            f => w.times()[f - 1],
        },
    }
}

/// Largest even bit width not above `preferred` that fits `bit_count` bits in
/// `columns`, never below 2.
pub fn fit_bit_width(columns: u16, bit_count: usize, preferred: u16) -> u16 {
    if bit_count == 0 {
        return preferred;
    }
    let fitting = (columns as usize / bit_count).min(preferred as usize) as u16;
    u16::max(fitting - fitting % 2, 2)
}

#[cfg(test)]
mod test {
    use lineform_rs::{bits, Scheme};

    use super::{fit_bit_width, WaveSpec};

    fn wave_spec(text: &str, scheme: Scheme) -> WaveSpec {
        WaveSpec::new(bits::parse(text).unwrap(), scheme)
    }

    #[test]
    fn test_step_frames() {
        let mut spec = wave_spec("0110", Scheme::NrzL);
        assert_eq!(spec.frame_count(), 5);
        assert_eq!(spec.reveal_time(), 0.0);
        assert_eq!(spec.revealed_bits(), 0);

        spec.set_frame(3);
        assert_eq!(spec.reveal_time(), 3.0);
        assert_eq!(spec.revealed_bits(), 3);

        spec.set_frame(100);
        assert_eq!(spec.frame(), 4);
        assert_eq!(spec.reveal_time(), 4.0);
    }

    #[test]
    fn test_transition_frames() {
        let mut spec = wave_spec("10", Scheme::Manchester);
        assert_eq!(spec.frame_count(), 9);

        spec.set_frame(1);
        assert_eq!(spec.reveal_time(), 0.0);
        assert_eq!(spec.revealed_bits(), 0);

        spec.set_frame(2);
        assert_eq!(spec.reveal_time(), 0.5);
        assert_eq!(spec.revealed_bits(), 1);

        spec.set_frame(5);
        assert_eq!(spec.reveal_time(), 1.0);
        assert_eq!(spec.revealed_bits(), 1);

        spec.set_frame(8);
        assert_eq!(spec.reveal_time(), 2.0);
        assert_eq!(spec.revealed_bits(), 2);
    }

    #[test]
    fn test_differential_manchester_frames() {
        let spec = wave_spec("01", Scheme::DifferentialManchester);
        assert_eq!(spec.frame_count(), 10);
    }

    #[test]
    fn test_fit_bit_width() {
        assert_eq!(fit_bit_width(80, 8, 8), 8);
        assert_eq!(fit_bit_width(60, 8, 8), 6);
        assert_eq!(fit_bit_width(40, 8, 8), 4);
        assert_eq!(fit_bit_width(10, 8, 8), 2);
        assert_eq!(fit_bit_width(100, 4, 6), 6);
        assert_eq!(fit_bit_width(100, 0, 8), 8);
    }
}
