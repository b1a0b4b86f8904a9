//! Mouse input handling for the teleprompter.
//!
//! A left click on the scrubber jumps to the cue whose marker is nearest.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::render::{cue_at_column, PlayerLayout};
use crate::player::state::{InputResult, PlayerState};

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut PlayerState,
    layout: &PlayerLayout,
    now: Instant,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let bar = layout.scrubber;
        let on_bar = mouse.row == bar.y && mouse.column >= bar.x && mouse.column < bar.x + bar.width;
        if on_bar && !state.show_help {
            let column = (mouse.column - bar.x) as usize;
            let duration = state.cues().duration_seconds();
            if let Some(index) = cue_at_column(column, bar.width as usize, duration, state.cues().cues()) {
                state.seek_to_cue_at(index, now);
            }
        }
    }

    InputResult::Continue
}
