//! Keyboard input handling for the teleprompter.
//!
//! Handles playback controls, cue stepping, the help overlay and quitting.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, PlayerState};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut PlayerState, now: Instant) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Session ===
        KeyCode::Char('R') => InputResult::ResetSession,

        // === Mode toggles ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        // === Playback controls ===
        KeyCode::Char(' ') => {
            state.toggle_pause_at(now);
            InputResult::Continue
        }

        // === Cue stepping ===
        KeyCode::Left | KeyCode::Char('h') => {
            state.step_backward_at(now);
            InputResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.step_forward_at(now);
            InputResult::Continue
        }
        KeyCode::Home => {
            state.seek_to_start_at(now);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
