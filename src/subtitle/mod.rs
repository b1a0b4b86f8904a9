//! Subtitle cues and the per-session cue store.
//!
//! - [`timestamp`] - `HH:MM:SS,mmm` codec
//! - [`srt`] - `.srt` text parser producing [`Cue`]s
//! - [`lookup`] - active-cue lookup for a given elapsed time
//! - [`markup`] - restricted formatting tags for display

pub mod lookup;
pub mod markup;
pub mod srt;
pub mod timestamp;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use lookup::{active_cue, active_cue_index, navigation_anchor, Anchor};

/// One subtitle entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    /// Sequence number from the `.srt` file, if it had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Start in fractional seconds
    pub start_seconds: f64,
    /// Start as `HH:MM:SS,mmm`
    pub start_time: String,
    /// End in fractional seconds
    pub end_seconds: f64,
    /// End as `HH:MM:SS,mmm`
    pub end_time: String,
    /// Raw cue text, lines separated by `\n`
    pub text: String,
}

impl Cue {
    /// Build a cue from millisecond bounds, deriving both representations.
    pub fn from_millis(id: Option<u32>, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            start_seconds: start_ms as f64 / 1000.0,
            start_time: timestamp::format_ms(start_ms),
            end_seconds: end_ms as f64 / 1000.0,
            end_time: timestamp::format_ms(end_ms),
            text: text.into(),
        }
    }
}

/// Ordered, immutable sequence of cues for one session.
///
/// Cloning is cheap; the cues are shared. A new load builds a new store
/// rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CueStore {
    cues: Arc<[Cue]>,
}

impl CueStore {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self { cues: cues.into() }
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    /// End of the last cue in seconds (the timeline length).
    pub fn duration_seconds(&self) -> f64 {
        self.cues.last().map(|c| c.end_seconds).unwrap_or(0.0)
    }

    /// Cue active at `elapsed_ms`, with its index.
    pub fn active_at(&self, elapsed_ms: u64) -> Option<(usize, &Cue)> {
        active_cue_index(elapsed_ms, &self.cues).map(|i| (i, &self.cues[i]))
    }

    /// Silent stretches between consecutive cues, as `(after_index, gap_seconds)`.
    pub fn gaps(&self) -> Vec<(usize, f64)> {
        self.cues
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let gap = pair[1].start_seconds - pair[0].end_seconds;
                (gap > 0.0).then_some((i, gap))
            })
            .collect()
    }
}

impl From<Vec<Cue>> for CueStore {
    fn from(cues: Vec<Cue>) -> Self {
        Self::new(cues)
    }
}
