//! Fixed-rate frame pacing
//!
//! The simulation always advances by one fixed `tick_duration` per frame; the
//! clock only sleeps away whatever is left of the frame budget so the loop
//! runs at the target rate.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    tick: Duration,
    last: Instant,
    frames: u64,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second (0 is treated as 1)
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1) as u64;
        Self {
            tick: Duration::from_nanos(1_000_000_000 / fps),
            last: Instant::now(),
            frames: 0,
        }
    }

    /// Simulated time covered by one frame
    #[inline]
    pub fn tick_duration(&self) -> Duration {
        self.tick
    }

    /// Frames paced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time left in the current frame budget as of `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.last + self.tick).saturating_duration_since(now)
    }

    /// Sleep until the current frame budget is spent, then start the next frame.
    /// Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let sleep = self.remaining(Instant::now());
        if !sleep.is_zero() {
            std::thread::sleep(sleep);
        }
        self.last = Instant::now();
        self.frames += 1;
        sleep
    }
}
