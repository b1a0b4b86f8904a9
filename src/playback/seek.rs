//! Seek targets and stepping rules.
//!
//! Navigation never touches cue data. It picks a target and the clock is
//! reset to the offset of that target's start.

use std::time::Duration;

use crate::subtitle::{Anchor, Cue};

/// Where a navigation action wants the clock to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekTarget {
    /// Absolute zero, before any cue
    Zero,
    /// Start of the cue at this index
    Cue(usize),
}

/// Clock offset that lands exactly on `cue`'s start.
///
/// Whole seconds come from `start_seconds`, milliseconds from the fraction
/// of the formatted `start_time` (0 when it has none).
pub fn offset_for_cue(cue: &Cue) -> Duration {
    let base_seconds = cue.start_seconds.max(0.0).floor() as u64;
    let extra_ms = cue
        .start_time
        .split_once(',')
        .and_then(|(_, ms)| ms.trim().parse::<u64>().ok())
        .unwrap_or(0);
    Duration::from_secs(base_seconds) + Duration::from_millis(extra_ms)
}

/// Clock offset for a resolved target. `None` if the index is out of range.
pub fn offset_for_target(target: SeekTarget, cues: &[Cue]) -> Option<Duration> {
    match target {
        SeekTarget::Zero => Some(Duration::ZERO),
        SeekTarget::Cue(idx) => cues.get(idx).map(offset_for_cue),
    }
}

/// Target for "next cue", clamped to the last cue.
pub fn step_forward(anchor: Anchor, len: usize) -> Option<SeekTarget> {
    let last = len.checked_sub(1)?;
    let next = match anchor {
        Anchor::Active(i) | Anchor::Gap { previous: i } => i.saturating_add(1),
        Anchor::BeforeFirst => 0,
    };
    Some(SeekTarget::Cue(next.min(last)))
}

/// Target for "previous cue".
///
/// From the first cue (or before it) this resets to absolute zero rather
/// than re-seeking to cue 0, so repeated presses there stay at zero. From a
/// gap it returns to the start of the cue just played.
pub fn step_backward(anchor: Anchor, len: usize) -> Option<SeekTarget> {
    let last = len.checked_sub(1)?;
    let target = match anchor {
        Anchor::Active(0) | Anchor::BeforeFirst => SeekTarget::Zero,
        Anchor::Active(i) => SeekTarget::Cue((i - 1).min(last)),
        Anchor::Gap { previous } => SeekTarget::Cue(previous.min(last)),
    };
    Some(target)
}
