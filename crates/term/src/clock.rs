//! Frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame rate and performs the blocking feedback delays.
pub trait Pacer {
    /// End the current frame, waiting out whatever remains of its budget.
    fn tick(&mut self);

    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock pacer: sleeps the remainder of each frame budget.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame
    }
}

impl Pacer for FrameClock {
    fn tick(&mut self) {
        if let Some(left) = self.frame.checked_sub(self.last.elapsed()) {
            thread::sleep(left);
        }
        self.last = Instant::now();
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
        self.last = Instant::now();
    }
}

/// Virtual clock that never blocks; it only counts.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: u64,
    slept: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total time passed to [`Pacer::sleep`]
    pub fn slept(&self) -> Duration {
        self.slept
    }
}

impl Pacer for ManualClock {
    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
    }
}
