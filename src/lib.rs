//! subprompt - terminal subtitle teleprompter
//!
//! Loads `.srt` files into a persisted session and plays them one cue at a
//! time against a pausable clock.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod playback;
pub mod player;
pub mod session;
pub mod storage;
pub mod subtitle;
pub mod theme;

pub use config::Config;
pub use error::{LoadError, SrtError, StoreError, TimestampError};
pub use session::{Session, SessionState};
pub use subtitle::{Cue, CueStore};
