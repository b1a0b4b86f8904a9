//! Error types for subtitle parsing, session loading and persisted state.

use std::path::PathBuf;

/// A timestamp that does not match the expected `HH:MM:SS,mmm` shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("malformed timestamp: {0:?}")]
    Malformed(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u64 },
}

/// Errors produced while parsing `.srt` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SrtError {
    #[error("no subtitle cues found")]
    Empty,

    #[error("line {line}: expected a timing line like `00:00:01,000 --> 00:00:02,000`, found {found:?}")]
    MissingTiming { line: usize, found: String },

    #[error("line {line}: invalid timestamp")]
    Timestamp {
        line: usize,
        #[source]
        source: TimestampError,
    },
}

/// Errors produced when loading subtitles into a session.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid SRT file")]
    InvalidFile(#[from] SrtError),

    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the persisted key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode state")]
    Encode(#[from] serde_json::Error),

    #[error("failed to access state file")]
    Io(#[from] std::io::Error),
}
