//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Holds the main loop to a target frame rate.
#[derive(Debug)]
pub struct FrameClock {
    frame_time: Duration,
    last: Instant,
}

impl FrameClock {
    /// A clock targeting `fps` frames per second (at least 1).
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Sleep out the rest of the current frame and return the time since the
    /// previous tick.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last.elapsed();
        if let Some(remaining) = self.frame_time.checked_sub(busy) {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt
    }
}
