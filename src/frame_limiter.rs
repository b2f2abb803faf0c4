use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping off whatever is left of each frame
///
/// Advisory only: a slow frame is never made up for, the next one just
/// starts late.
pub struct FrameLimiter {
    frame_time: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        FrameLimiter {
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Time left in a frame that has already run for `elapsed`
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_time.saturating_sub(elapsed)
    }

    /// Sleeps until the current frame's budget is used up, then starts the next
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
