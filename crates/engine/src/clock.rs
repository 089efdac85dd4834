//! Fixed-rate frame clock.

use std::time::{Duration, Instant};

/// Rate limiter for the frame loop.
///
/// [`Clock::tick`] blocks until one `1/fps` interval has passed since the
/// previous call, so the loop never runs faster than the target rate.
#[derive(Debug, Clone)]
pub struct Clock {
    last: Option<Instant>,
    throttle: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last: None,
            throttle: true,
        }
    }

    /// A clock that measures but never sleeps. Used by headless runs and tests.
    pub fn unthrottled() -> Self {
        Self {
            last: None,
            throttle: false,
        }
    }

    /// Wait out the rest of the current frame and return the time since the previous tick.
    ///
    /// The first call returns immediately with a zero duration.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return Duration::ZERO;
        };

        if self.throttle {
            if let Some(remaining) = frame_duration(fps).checked_sub(last.elapsed()) {
                std::thread::sleep(remaining);
            }
        }

        let now = Instant::now();
        self.last = Some(now);
        now - last
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of one frame at `fps`. Zero fps means no pacing.
pub fn frame_duration(fps: u32) -> Duration {
    if fps == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(1) / fps
}
