//! Playback timing: the stopwatch clock and seek arithmetic.

mod clock;
mod seek;

pub use clock::Clock;
pub use seek::{offset_for_cue, offset_for_target, step_backward, step_forward, SeekTarget};
