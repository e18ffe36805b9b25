use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub frame_interval: Duration,
    pub loop_pause: Duration,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    Playing,
    /// Showing the last frame before looping back to frame 0.
    Holding,
}

/// Frame schedule of a looping animation, free of any clock. The driver asks
/// [`Playback::next_delay`] how long to wait and calls [`Playback::advance`]
/// once that delay has elapsed.
#[derive(Debug, Default)]
pub struct Playback {
    state: State,
    frame: usize,
    frames: usize,
}

impl Playback {
    /// Restarts from frame 0 and returns it.
    pub fn start(&mut self, frames: usize) -> usize {
        self.frames = frames;
        self.frame = 0;
        self.state = match frames {
            0 => State::Idle,
            1 => State::Holding,
            _ => State::Playing,
        };
        self.frame
    }

    pub fn stop(&mut self) {
        self.state = State::Idle;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// `None` while idle: nothing is scheduled until the next request.
    pub fn next_delay(&self, timing: &Timing) -> Option<Duration> {
        match self.state {
            State::Idle => None,
            State::Playing => Some(timing.frame_interval),
            State::Holding => Some(timing.loop_pause),
        }
    }

    /// Moves to the next frame and returns it, or `None` while idle.
    pub fn advance(&mut self) -> Option<usize> {
        match self.state {
            State::Idle => return None,
            State::Playing => {
                self.frame += 1;
                if self.frame + 1 >= self.frames {
                    self.state = State::Holding;
                }
            }
            State::Holding => {
                self.frame = 0;
                if self.frames > 1 {
                    self.state = State::Playing;
                }
            }
        }
        Some(self.frame)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{Playback, State, Timing};

    const TIMING: Timing = Timing {
        frame_interval: Duration::from_millis(300),
        loop_pause: Duration::from_millis(2000),
    };

    #[test]
    fn test_idle_by_default() {
        let mut playback = Playback::default();
        assert_eq!(playback.state(), State::Idle);
        assert_eq!(playback.next_delay(&TIMING), None);
        assert_eq!(playback.advance(), None);
    }

    #[test]
    fn test_plays_holds_and_loops() {
        let mut playback = Playback::default();
        assert_eq!(playback.start(3), 0);
        assert_eq!(playback.next_delay(&TIMING), Some(Duration::from_millis(300)));

        assert_eq!(playback.advance(), Some(1));
        assert_eq!(playback.state(), State::Playing);
        assert_eq!(playback.next_delay(&TIMING), Some(Duration::from_millis(300)));

        assert_eq!(playback.advance(), Some(2));
        assert_eq!(playback.state(), State::Holding);
        assert_eq!(playback.next_delay(&TIMING), Some(Duration::from_millis(2000)));

        assert_eq!(playback.advance(), Some(0));
        assert_eq!(playback.state(), State::Playing);
        assert_eq!(playback.advance(), Some(1));
    }

    #[test]
    fn test_frame_sequence_over_two_loops() {
        let mut playback = Playback::default();
        playback.start(4);
        let frames: Vec<usize> = (0..8).filter_map(|_| playback.advance()).collect();
        assert_eq!(frames, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_stop_halts() {
        let mut playback = Playback::default();
        playback.start(5);
        playback.advance();
        playback.stop();
        assert_eq!(playback.next_delay(&TIMING), None);
        assert_eq!(playback.advance(), None);
        assert_eq!(playback.frame(), 1);
    }

    #[test]
    fn test_start_resets() {
        let mut playback = Playback::default();
        playback.start(5);
        playback.advance();
        playback.advance();
        assert_eq!(playback.start(2), 0);
        assert_eq!(playback.frame(), 0);
        assert_eq!(playback.advance(), Some(1));
        assert_eq!(playback.state(), State::Holding);
    }

    #[test]
    fn test_degenerate_lengths() {
        let mut playback = Playback::default();
        playback.start(0);
        assert_eq!(playback.state(), State::Idle);

        playback.start(1);
        assert_eq!(playback.next_delay(&TIMING), Some(Duration::from_millis(2000)));
        assert_eq!(playback.advance(), Some(0));
        assert_eq!(playback.state(), State::Holding);
    }
}
