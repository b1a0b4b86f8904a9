//! Terminal teleprompter.
//!
//! Shows the active cue of a loaded session against a running clock, with
//! play/pause, cue stepping and a clickable scrubber.
//!
//! # Architecture
//!
//! - `state`: PlayerState and the shared InputResult type
//! - `input/`: keyboard and mouse handling
//! - `render/`: layout, subtitle panel, transport, scrubber and help overlay
//! - `app`: terminal setup and the main loop

mod app;
pub mod input;
pub mod render;
pub mod state;

pub use app::{run, PlayerOutcome};
pub use state::{InputResult, PlayerState};
