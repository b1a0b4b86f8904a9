//! Input handling for the teleprompter.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use crate::player::render::PlayerLayout;
use crate::player::state::{InputResult, PlayerState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// `layout` is the layout of the last drawn frame, used to hit-test
/// mouse clicks against the scrubber.
pub fn handle_event(
    event: Event,
    state: &mut PlayerState,
    layout: &PlayerLayout,
    now: Instant,
) -> InputResult {
    match event {
        // Windows reports releases too
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(key, state, now),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, layout, now),
        Event::Resize(_, _) => {
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
