//! Stopwatch-style playback clock.
//!
//! The clock holds a zero reference and a running flag. Elapsed time only
//! advances while running; seeks replace it outright via [`Clock::reset`].
//! Every operation has an `_at` variant taking an explicit `Instant` so the
//! arithmetic can be driven deterministically.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Clock {
    running: bool,
    /// Elapsed time accumulated up to `resumed_at`
    base: Duration,
    /// When the clock last (re)started counting from `base`
    resumed_at: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// A paused clock at zero.
    pub fn new() -> Self {
        Self {
            running: false,
            base: Duration::ZERO,
            resumed_at: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        if self.running {
            self.base + now.saturating_duration_since(self.resumed_at)
        } else {
            self.base
        }
    }

    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms_at(Instant::now())
    }

    pub fn elapsed_ms_at(&self, now: Instant) -> u64 {
        self.elapsed_at(now).as_millis() as u64
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start counting. No-op when already running.
    pub fn start_at(&mut self, now: Instant) {
        if !self.running {
            self.resumed_at = now;
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    /// Freeze elapsed time. No-op when already paused.
    pub fn pause_at(&mut self, now: Instant) {
        if self.running {
            self.base = self.elapsed_at(now);
            self.running = false;
        }
    }

    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    pub fn toggle_at(&mut self, now: Instant) {
        if self.running {
            self.pause_at(now);
        } else {
            self.start_at(now);
        }
    }

    pub fn reset(&mut self, offset: Duration, autostart: bool) {
        self.reset_at(Instant::now(), offset, autostart);
    }

    /// Move the zero reference so that elapsed time equals `offset` at `now`.
    pub fn reset_at(&mut self, now: Instant, offset: Duration, autostart: bool) {
        self.base = offset;
        self.resumed_at = now;
        self.running = autostart;
    }
}
