//! Active-cue lookup.
//!
//! Maps an elapsed time onto the cue store. Intervals are half-open: a cue
//! is active from its start instant up to, but not including, its end.
//! Lookups are pure and run once per player tick.

use super::timestamp::parse_to_ms;
use super::Cue;

/// Where an elapsed time falls relative to the cues, for stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A cue is active at this index
    Active(usize),
    /// Between cues (or after the last); `previous` is the last cue that started before
    Gap { previous: usize },
    /// Before the first cue starts, or no cues at all
    BeforeFirst,
}

/// Millisecond bounds of a cue, taken from its formatted timestamps.
fn bounds_ms(cue: &Cue) -> Option<(u64, u64)> {
    match (parse_to_ms(&cue.start_time), parse_to_ms(&cue.end_time)) {
        (Ok(start), Ok(end)) => Some((start, end)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(
                start = %cue.start_time,
                end = %cue.end_time,
                error = %e,
                "Skipping cue with unparsable timestamp"
            );
            None
        }
    }
}

/// Index of the first cue whose `[start, end)` contains `elapsed_ms`.
pub fn active_cue_index(elapsed_ms: u64, cues: &[Cue]) -> Option<usize> {
    cues.iter().position(|cue| {
        bounds_ms(cue).is_some_and(|(start, end)| elapsed_ms >= start && elapsed_ms < end)
    })
}

/// The first cue whose `[start, end)` contains `elapsed_ms`.
pub fn active_cue(elapsed_ms: u64, cues: &[Cue]) -> Option<&Cue> {
    active_cue_index(elapsed_ms, cues).map(|i| &cues[i])
}

/// Classify `elapsed_ms` as inside a cue, in a gap, or before the first cue.
pub fn navigation_anchor(elapsed_ms: u64, cues: &[Cue]) -> Anchor {
    if let Some(idx) = active_cue_index(elapsed_ms, cues) {
        return Anchor::Active(idx);
    }

    let previous = cues
        .iter()
        .enumerate()
        .filter(|(_, cue)| bounds_ms(cue).is_some_and(|(start, _)| start <= elapsed_ms))
        .map(|(i, _)| i)
        .last();

    match previous {
        Some(previous) => Anchor::Gap { previous },
        None => Anchor::BeforeFirst,
    }
}
