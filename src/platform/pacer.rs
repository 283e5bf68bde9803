//! Frame pacers
//!
//! [`RealtimePacer`] sleeps out the rest of each 1/60 s frame against the
//! wall clock. [`FixedStepPacer`] never sleeps and advances a virtual clock
//! by exactly one frame per wait, for tests and fast-forward runs.

use std::time::{Duration, Instant};

use super::FramePacer;
use crate::consts::FPS;

/// Wall-clock pacer capped at [`FPS`]
#[derive(Debug)]
pub struct RealtimePacer {
    started: Instant,
    frame_start: Instant,
    frame_budget: Duration,
}

impl Default for RealtimePacer {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimePacer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            frame_start: now,
            frame_budget: Duration::from_secs(1) / FPS,
        }
    }
}

impl FramePacer for RealtimePacer {
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn wait_next_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_budget {
            spin_sleep::sleep(self.frame_budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

/// Virtual clock advancing one frame per wait
#[derive(Debug, Clone, Default)]
pub struct FixedStepPacer {
    frames: u64,
}

impl FixedStepPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames waited so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FramePacer for FixedStepPacer {
    fn now_ms(&self) -> u64 {
        self.frames * 1000 / FPS as u64
    }

    fn wait_next_frame(&mut self) {
        self.frames += 1;
    }
}
