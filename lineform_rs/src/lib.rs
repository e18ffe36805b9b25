pub mod bits;
pub mod encoder;
pub mod error;
pub mod scheme;
pub mod waveform;

pub use bits::Bits;
pub use encoder::encode;
pub use error::{Error, LineformResult};
pub use scheme::{Scheme, Shape};
pub use waveform::{Level, Segment, StepWaveform, TransitionWaveform, Vertex, Waveform};
