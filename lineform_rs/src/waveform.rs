use std::{fmt, ops::Neg};

use crate::scheme::Shape;

/// Line voltage in units of the signalling amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Negative,
    Zero,
    Positive,
}

impl Level {
    pub fn value(self) -> i8 {
        match self {
            Level::Negative => -1,
            Level::Zero => 0,
            Level::Positive => 1,
        }
    }

    /// Low for 0, high for 1.
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Level::Positive
        } else {
            Level::Negative
        }
    }
}

impl Neg for Level {
    type Output = Level;

    fn neg(self) -> Self::Output {
        match self {
            Level::Negative => Level::Positive,
            Level::Zero => Level::Zero,
            Level::Positive => Level::Negative,
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Negative => f.write_str("-1"),
            Level::Zero => f.write_str("0"),
            Level::Positive => f.write_str("+1"),
        }
    }
}

/// A coordinate of the plotted signal. The level holds from `time` until the
/// next vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub time: f64,
    pub level: Level,
}

/// A horizontal piece of the signal over `[start, end)`, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub level: Level,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepWaveform {
    levels: Vec<Level>,
}

/// Vertices of a signal that may change level between integer times.
///
/// `times` and `levels` always have the same length and `times` never
/// decreases. Two consecutive vertices at the same time describe a vertical
/// jump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionWaveform {
    times: Vec<f64>,
    levels: Vec<Level>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Waveform {
    Step(StepWaveform),
    Transition(TransitionWaveform),
}

impl StepWaveform {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<Level> for StepWaveform {
    fn from_iter<T: IntoIterator<Item = Level>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TransitionWaveform {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            levels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: f64, level: Level) {
        debug_assert!(self.times.last().map_or(true, |last| *last <= time));
        self.times.push(time);
        self.levels.push(level);
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Waveform {
    pub fn shape(&self) -> Shape {
        match self {
            Waveform::Step(_) => Shape::Step,
            Waveform::Transition(_) => Shape::Transition,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Waveform::Step(w) => w.len(),
            Waveform::Transition(w) => w.len(),
        }
    }

    /// Coordinates for a post-step plot. A step waveform yields `(i, level[i])`.
    pub fn vertices(&self) -> Vec<Vertex> {
        match self {
            Waveform::Step(w) => w
                .levels()
                .iter()
                .enumerate()
                .map(|(i, level)| Vertex {
                    time: i as f64,
                    level: *level,
                })
                .collect(),
            Waveform::Transition(w) => w
                .times()
                .iter()
                .zip(w.levels())
                .map(|(time, level)| Vertex {
                    time: *time,
                    level: *level,
                })
                .collect(),
        }
    }

    /// Time at which the signal ends, in bit periods.
    pub fn duration(&self) -> f64 {
        match self {
            Waveform::Step(w) => w.len() as f64,
            Waveform::Transition(w) => w.times().last().copied().unwrap_or(0.0),
        }
    }

    /// Non-degenerate horizontal pieces of the signal, in time order.
    pub fn segments(&self) -> Vec<Segment> {
        let vertices = self.vertices();
        let duration = self.duration();
        vertices
            .iter()
            .enumerate()
            .filter_map(|(i, vertex)| {
                let end = vertices.get(i + 1).map_or(duration, |next| next.time);
                (end > vertex.time).then_some(Segment {
                    start: vertex.time,
                    end,
                    level: vertex.level,
                })
            })
            .collect()
    }

    /// Level in force right after `time`.
    pub fn level_at(&self, time: f64) -> Option<Level> {
        self.segments()
            .into_iter()
            .find(|s| s.start <= time && time < s.end)
            .map(|s| s.level)
    }

    /// Level in force right before `time`.
    pub fn level_before(&self, time: f64) -> Option<Level> {
        self.segments()
            .into_iter()
            .find(|s| s.start < time && time <= s.end)
            .map(|s| s.level)
    }
}
