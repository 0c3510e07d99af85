use std::time::Duration;

/// Fixed end-of-frame delay derived from the target frame rate.
///
/// The delay does not subtract render time, so the achieved rate is at or
/// below the target, never above.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frames: u64,
}

impl FramePacer {
    /// Non-positive or non-finite rates pace as fast as possible.
    pub fn new(fps: f64) -> Self {
        let interval = Duration::try_from_secs_f64(1.0 / fps).unwrap_or(Duration::ZERO);
        Self {
            interval,
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Count a finished frame and return how long to sleep before the next one.
    pub fn frame_done(&mut self) -> Duration {
        self.frames += 1;
        self.interval
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
