//! Line-code transforms.
//!
//! Every transform is a left-to-right scan over the bit stream. The stateful
//! ones carry a single [`Level`] accumulator that lives only for the duration
//! of the call, so all of them are pure and may be called from any thread.

use bitvec::slice::BitSlice;

use crate::{
    scheme::Scheme,
    waveform::{Level, StepWaveform, TransitionWaveform, Waveform},
};

/// Encodes `bits` with `scheme`. An empty stream gives an empty waveform of the
/// scheme's shape.
pub fn encode(scheme: Scheme, bits: &BitSlice<u32>) -> Waveform {
    match scheme {
        Scheme::NrzL => Waveform::Step(nrz_l(bits)),
        Scheme::NrzI => Waveform::Step(nrz_i(bits)),
        Scheme::BipolarAmi => Waveform::Step(bipolar_ami(bits)),
        Scheme::Pseudoternary => Waveform::Step(pseudoternary(bits)),
        Scheme::Manchester => Waveform::Transition(manchester(bits)),
        Scheme::DifferentialManchester => Waveform::Transition(differential_manchester(bits)),
    }
}

pub fn nrz_l(bits: &BitSlice<u32>) -> StepWaveform {
    bits.iter().map(|bit| Level::from_bit(*bit)).collect()
}

/// The running level starts from the first bit's own NRZ-L level and every 1
/// (including the first bit) inverts it.
pub fn nrz_i(bits: &BitSlice<u32>) -> StepWaveform {
    let Some(first) = bits.first() else {
        return StepWaveform::default();
    };
    bits.iter()
        .scan(Level::from_bit(*first), |level, bit| {
            if *bit {
                *level = -*level;
            }
            Some(*level)
        })
        .collect()
}

pub fn bipolar_ami(bits: &BitSlice<u32>) -> StepWaveform {
    alternate_marks(bits, true)
}

pub fn pseudoternary(bits: &BitSlice<u32>) -> StepWaveform {
    alternate_marks(bits, false)
}

pub fn manchester(bits: &BitSlice<u32>) -> TransitionWaveform {
    let mut waveform = TransitionWaveform::with_capacity(4 * bits.len());
    for (i, bit) in bits.iter().enumerate() {
        let (start, mid, end) = bit_times(i);
        let (first_half, second_half) = if *bit {
            (Level::Negative, Level::Positive)
        } else {
            (Level::Positive, Level::Negative)
        };
        waveform.push(start, first_half);
        waveform.push(mid, first_half);
        waveform.push(mid, second_half);
        waveform.push(end, second_half);
    }
    waveform
}

pub fn differential_manchester(bits: &BitSlice<u32>) -> TransitionWaveform {
    let mut waveform = TransitionWaveform::with_capacity(5 * bits.len());
    let mut level = Level::Positive;
    for (i, bit) in bits.iter().enumerate() {
        let (start, mid, end) = bit_times(i);
        if *bit {
            waveform.push(start, level);
        } else {
            level = -level;
            waveform.push(start, level);
            waveform.push(start, level);
        }
        waveform.push(mid, -level);
        level = -level;
        waveform.push(mid, level);
        waveform.push(end, level);
    }
    waveform
}

/// Emits alternating non-zero levels for every bit equal to `mark`, starting
/// positive, and zero for the others.
fn alternate_marks(bits: &BitSlice<u32>, mark: bool) -> StepWaveform {
    bits.iter()
        .scan(Level::Positive, |next_level, bit| {
            if *bit == mark {
                let level = *next_level;
                *next_level = -level;
                Some(level)
            } else {
                Some(Level::Zero)
            }
        })
        .collect()
}

fn bit_times(i: usize) -> (f64, f64, f64) {
    let start = i as f64;
    (start, start + 0.5, start + 1.0)
}

#[cfg(test)]
mod test {
    use bitvec::slice::BitSlice;

    use super::encode;
    use crate::{
        bits::{self, Bits},
        scheme::{Scheme, Shape},
        waveform::{Level, Waveform},
    };

    const N: i8 = -1;
    const P: i8 = 1;

    fn bits_of(text: &str) -> Bits {
        bits::parse(text).unwrap()
    }

    fn step_values(waveform: &Waveform) -> Vec<i8> {
        match waveform {
            Waveform::Step(w) => w.levels().iter().map(|l| l.value()).collect(),
            Waveform::Transition(_) => panic!("expected a step waveform"),
        }
    }

    fn transition_values(waveform: &Waveform) -> (Vec<f64>, Vec<i8>) {
        match waveform {
            Waveform::Transition(w) => (
                w.times().to_vec(),
                w.levels().iter().map(|l| l.value()).collect(),
            ),
            Waveform::Step(_) => panic!("expected a transition waveform"),
        }
    }

    fn all_bit_streams(max_len: usize) -> Vec<Bits> {
        let mut streams = vec![];
        for len in 1..=max_len {
            for value in 0u32..(1 << len) {
                streams.push((0..len).map(|i| value >> i & 1 == 1).collect());
            }
        }
        streams
    }

    fn non_zero(levels: &[i8]) -> Vec<i8> {
        levels.iter().copied().filter(|l| *l != 0).collect()
    }

    fn assert_alternating(levels: &[i8]) {
        for pair in levels.windows(2) {
            assert_eq!(pair[0], -pair[1], "levels do not alternate: {levels:?}");
        }
    }

    #[test]
    fn test_nrz_l_example() {
        let w = encode(Scheme::NrzL, &bits_of("01001110"));
        assert_eq!(step_values(&w), vec![N, P, N, N, P, P, P, N]);
    }

    #[test]
    fn test_nrz_l_depends_only_on_own_bit() {
        for bits in all_bit_streams(6) {
            let levels = step_values(&encode(Scheme::NrzL, &bits));
            for (i, level) in levels.iter().enumerate() {
                assert_eq!(*level, if bits[i] { P } else { N });
            }
        }
    }

    #[test]
    fn test_nrz_i_example() {
        let w = encode(Scheme::NrzI, &bits_of("01001110"));
        assert_eq!(step_values(&w), vec![N, P, P, P, N, P, N, N]);
    }

    #[test]
    fn test_nrz_i_first_bit_inverts_its_own_level() {
        assert_eq!(step_values(&encode(Scheme::NrzI, &bits_of("0"))), vec![N]);
        assert_eq!(step_values(&encode(Scheme::NrzI, &bits_of("1"))), vec![N]);
        assert_eq!(
            step_values(&encode(Scheme::NrzI, &bits_of("1100"))),
            vec![N, P, P, P]
        );
    }

    #[test]
    fn test_nrz_i_transitions_only_on_ones() {
        for bits in all_bit_streams(7) {
            let levels = step_values(&encode(Scheme::NrzI, &bits));
            for i in 1..levels.len() {
                assert_eq!(levels[i] != levels[i - 1], bits[i]);
            }
        }
    }

    #[test]
    fn test_bipolar_ami_example() {
        let w = encode(Scheme::BipolarAmi, &bits_of("01001110"));
        assert_eq!(step_values(&w), vec![0, P, 0, 0, N, P, N, 0]);
    }

    #[test]
    fn test_bipolar_ami_properties() {
        for bits in all_bit_streams(8) {
            let levels = step_values(&encode(Scheme::BipolarAmi, &bits));
            for (i, level) in levels.iter().enumerate() {
                assert_eq!(*level == 0, !bits[i]);
            }
            let marks = non_zero(&levels);
            assert_alternating(&marks);
            if let Some(first) = marks.first() {
                assert_eq!(*first, P);
            }
        }
    }

    #[test]
    fn test_pseudoternary_example() {
        let w = encode(Scheme::Pseudoternary, &bits_of("01001110"));
        assert_eq!(step_values(&w), vec![P, 0, N, P, 0, 0, 0, N]);
    }

    #[test]
    fn test_pseudoternary_properties() {
        for bits in all_bit_streams(8) {
            let levels = step_values(&encode(Scheme::Pseudoternary, &bits));
            for (i, level) in levels.iter().enumerate() {
                assert_eq!(*level == 0, bits[i]);
            }
            assert_alternating(&non_zero(&levels));
        }
    }

    #[test]
    fn test_step_waveforms_match_input_length() {
        for bits in all_bit_streams(6) {
            for scheme in Scheme::ALL.iter().filter(|s| s.shape() == Shape::Step) {
                assert_eq!(encode(*scheme, &bits).vertex_count(), bits.len());
            }
        }
    }

    #[test]
    fn test_manchester_example() {
        let (times, levels) = transition_values(&encode(Scheme::Manchester, &bits_of("101")));
        assert_eq!(
            times,
            vec![0.0, 0.5, 0.5, 1.0, 1.0, 1.5, 1.5, 2.0, 2.0, 2.5, 2.5, 3.0]
        );
        assert_eq!(levels, vec![N, N, P, P, P, P, N, N, N, N, P, P]);
    }

    #[test]
    fn test_manchester_center_transitions() {
        for bits in all_bit_streams(6) {
            let w = encode(Scheme::Manchester, &bits);
            for (i, bit) in bits.iter().enumerate() {
                let mid = i as f64 + 0.5;
                let (before, after) = if *bit {
                    (Level::Negative, Level::Positive)
                } else {
                    (Level::Positive, Level::Negative)
                };
                assert_eq!(w.level_before(mid), Some(before));
                assert_eq!(w.level_at(mid), Some(after));
            }
        }
    }

    #[test]
    fn test_differential_manchester_single_bits() {
        let (times, levels) =
            transition_values(&encode(Scheme::DifferentialManchester, &bits_of("0")));
        assert_eq!(times, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
        assert_eq!(levels, vec![N, N, P, P, P]);

        let (times, levels) =
            transition_values(&encode(Scheme::DifferentialManchester, &bits_of("1")));
        assert_eq!(times, vec![0.0, 0.5, 0.5, 1.0]);
        assert_eq!(levels, vec![P, N, N, N]);
    }

    #[test]
    fn test_differential_manchester_transitions() {
        for bits in all_bit_streams(7) {
            let w = encode(Scheme::DifferentialManchester, &bits);
            for (i, bit) in bits.iter().enumerate() {
                let start = i as f64;
                let mid = start + 0.5;
                assert_ne!(w.level_before(mid), w.level_at(mid));
                let level_before_start = if i == 0 {
                    Some(Level::Positive)
                } else {
                    w.level_before(start)
                };
                assert_eq!(level_before_start != w.level_at(start), !*bit);
                // no other change inside the bit
                assert_eq!(w.level_at(start), w.level_before(mid));
                assert_eq!(w.level_at(mid), w.level_before(start + 1.0));
            }
        }
    }

    #[test]
    fn test_transition_waveform_invariants() {
        for bits in all_bit_streams(6) {
            for scheme in [Scheme::Manchester, Scheme::DifferentialManchester] {
                let (times, levels) = transition_values(&encode(scheme, &bits));
                assert_eq!(times.len(), levels.len());
                assert!(times.windows(2).all(|t| t[0] <= t[1]));
                assert_eq!(times.first(), Some(&0.0));
                assert_eq!(times.last(), Some(&(bits.len() as f64)));
            }
        }
    }

    #[test]
    fn test_shape_follows_scheme() {
        let bits = bits_of("0110");
        for scheme in Scheme::ALL {
            assert_eq!(encode(scheme, &bits).shape(), scheme.shape());
        }
    }

    #[test]
    fn test_empty_stream() {
        for scheme in Scheme::ALL {
            let w = encode(scheme, BitSlice::empty());
            assert_eq!(w.vertex_count(), 0);
            assert_eq!(w.shape(), scheme.shape());
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let bits = bits_of("1011000111");
        for scheme in Scheme::ALL {
            assert_eq!(encode(scheme, &bits), encode(scheme, &bits));
        }
    }
}
