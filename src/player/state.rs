//! Player state management
//!
//! Contains the central `PlayerState` struct that holds the cue store, the
//! playback clock and UI flags, plus the shared `InputResult` type.

use std::time::Instant;

use crate::config::PlayerConfig;
use crate::playback::{offset_for_cue, offset_for_target, step_backward, step_forward, Clock, SeekTarget};
use crate::subtitle::{active_cue_index, navigation_anchor, Cue, CueStore};

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep playing/rendering
    Continue,
    /// Exit the player
    Quit,
    /// Discard the persisted session and exit
    ResetSession,
}

/// Central state for the teleprompter.
#[derive(Debug)]
pub struct PlayerState {
    cues: CueStore,
    /// Playback clock; elapsed time is the only source of truth for position
    pub clock: Clock,
    /// Cached active cue index for highlighting. Refreshed from the lookup
    /// on every tick and after every seek.
    current_index: Option<usize>,

    // === UI modes ===
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether `start - end` is shown under the subtitle
    pub show_timestamps: bool,

    // === Rendering flags ===
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Create state for `cues`, positioned at the start of `start_index`
    /// (or zero when `None`).
    pub fn new(cues: CueStore, start_index: Option<usize>, config: &PlayerConfig) -> Self {
        Self::new_at(Instant::now(), cues, start_index, config)
    }

    pub fn new_at(
        now: Instant,
        cues: CueStore,
        start_index: Option<usize>,
        config: &PlayerConfig,
    ) -> Self {
        let mut clock = Clock::new();
        let offset = start_index
            .and_then(|i| cues.get(i))
            .map(offset_for_cue)
            .unwrap_or_default();
        clock.reset_at(now, offset, config.autostart);

        let mut state = Self {
            cues,
            clock,
            current_index: None,
            show_help: false,
            show_timestamps: config.show_timestamps,
            needs_render: true,
        };
        state.tick_at(now);
        state
    }

    pub fn cues(&self) -> &CueStore {
        &self.cues
    }

    /// Cached index of the active cue.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_cue(&self) -> Option<&Cue> {
        self.current_index.and_then(|i| self.cues.get(i))
    }

    pub fn elapsed_ms_at(&self, now: Instant) -> u64 {
        self.clock.elapsed_ms_at(now)
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Re-derive the active cue and refresh the cache.
    ///
    /// Returns true when the active cue changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let derived = active_cue_index(self.elapsed_ms_at(now), self.cues.cues());
        if self.clock.is_running() {
            self.needs_render = true;
        }
        if derived != self.current_index {
            self.current_index = derived;
            self.needs_render = true;
            return true;
        }
        false
    }

    /// Toggle play/pause.
    pub fn toggle_pause_at(&mut self, now: Instant) {
        self.clock.toggle_at(now);
        self.needs_render = true;
    }

    /// Move the clock to `target`, keeping its running state.
    pub fn apply_seek(&mut self, target: SeekTarget, now: Instant) {
        let Some(offset) = offset_for_target(target, self.cues.cues()) else {
            return;
        };
        let running = self.clock.is_running();
        tracing::debug!(?target, offset_ms = offset.as_millis() as u64, running, "Seek");
        self.clock.reset_at(now, offset, running);
        self.tick_at(now);
        self.needs_render = true;
    }

    /// Step to the next cue (clamped at the last).
    pub fn step_forward_at(&mut self, now: Instant) {
        let anchor = navigation_anchor(self.elapsed_ms_at(now), self.cues.cues());
        if let Some(target) = step_forward(anchor, self.cues.len()) {
            self.apply_seek(target, now);
        }
    }

    /// Step to the previous cue; from the first cue, back to zero.
    pub fn step_backward_at(&mut self, now: Instant) {
        let anchor = navigation_anchor(self.elapsed_ms_at(now), self.cues.cues());
        if let Some(target) = step_backward(anchor, self.cues.len()) {
            self.apply_seek(target, now);
        }
    }

    /// Seek to the start of the cue at `index`.
    pub fn seek_to_cue_at(&mut self, index: usize, now: Instant) {
        if index < self.cues.len() {
            self.apply_seek(SeekTarget::Cue(index), now);
        }
    }

    /// Seek to absolute zero.
    pub fn seek_to_start_at(&mut self, now: Instant) {
        self.apply_seek(SeekTarget::Zero, now);
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
