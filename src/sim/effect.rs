//! Timed boolean effects (immunity, power-up, shatter grace period)
//!
//! An effect remembers when it was last started. It stays active while
//! `now - started_at <= duration` and is cleared by [`TimedEffect::refresh`]
//! once that window has passed. A cleared effect stays cleared until the
//! next [`TimedEffect::start`].

use serde::{Deserialize, Serialize};

/// A boolean flag with a start timestamp and a fixed duration (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEffect {
    active: bool,
    started_at: u64,
    duration_ms: u64,
}

impl TimedEffect {
    pub const fn new(duration_ms: u64) -> Self {
        Self {
            active: false,
            started_at: 0,
            duration_ms,
        }
    }

    /// Set the flag and (re)start the window at `now`
    pub fn start(&mut self, now: u64) {
        self.active = true;
        self.started_at = now;
    }

    /// Clear the flag if its window has expired
    pub fn refresh(&mut self, now: u64) {
        if self.has_elapsed(now) {
            self.active = false;
        }
    }

    /// Refresh, then report whether the effect is still running
    pub fn is_active(&mut self, now: u64) -> bool {
        self.refresh(now);
        self.active
    }

    /// Current flag value without consulting the clock
    #[inline]
    pub fn is_set(&self) -> bool {
        self.active
    }

    /// True once the flag is set and strictly more than `duration` has passed
    pub fn has_elapsed(&self, now: u64) -> bool {
        self.active && now.saturating_sub(self.started_at) > self.duration_ms
    }

    #[inline]
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Milliseconds left in the window (0 when inactive)
    pub fn remaining_ms(&self, now: u64) -> u64 {
        if !self.active {
            return 0;
        }
        (self.started_at + self.duration_ms).saturating_sub(now)
    }
}
