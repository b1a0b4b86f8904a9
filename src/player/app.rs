//! Terminal setup and the main player loop.

use std::io;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::{layout::Rect, DefaultTerminal};

use crate::config::PlayerConfig;
use crate::player::input::handle_event;
use crate::player::render::{render, PlayerLayout};
use crate::player::state::{InputResult, PlayerState};
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::theme::Theme;

/// How the player was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// User quit; the session stays as it is
    Quit,
    /// User asked to discard the session
    Reset,
}

/// Run the teleprompter for an active session until the user quits.
///
/// The active cue index is written through to the session's store every
/// time it changes.
pub fn run<S: KeyValueStore>(
    session: &mut Session<S>,
    config: &PlayerConfig,
    theme: &Theme,
) -> Result<PlayerOutcome> {
    let Some(cues) = session.cues().cloned() else {
        bail!("No subtitles loaded");
    };
    let mut state = PlayerState::new(cues, session.start_index(), config);

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        tracing::warn!(error = %e, "Mouse capture unavailable");
    }

    let result = event_loop(&mut terminal, session, &mut state, config, theme);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut DefaultTerminal,
    session: &mut Session<S>,
    state: &mut PlayerState,
    config: &PlayerConfig,
    theme: &Theme,
) -> Result<PlayerOutcome> {
    let tick = config.tick();
    let mut layout = PlayerLayout::new(Rect::default());
    let mut recorded = session.start_index();

    loop {
        let now = Instant::now();
        state.tick_at(now);
        record_index(session, state, &mut recorded);

        if state.needs_render {
            terminal.draw(|frame| {
                layout = PlayerLayout::new(frame.area());
                render(frame, state, theme, now);
            })?;
            state.needs_render = false;
        }

        if !event::poll(tick)? {
            continue;
        }
        match handle_event(event::read()?, state, &layout, Instant::now()) {
            InputResult::Continue => {}
            InputResult::Quit => return Ok(PlayerOutcome::Quit),
            InputResult::ResetSession => return Ok(PlayerOutcome::Reset),
        }
    }
}

/// Persist the active index when it differs from the last one written.
/// Gaps keep the previous value.
fn record_index<S: KeyValueStore>(
    session: &mut Session<S>,
    state: &PlayerState,
    recorded: &mut Option<usize>,
) {
    let Some(index) = state.current_index() else {
        return;
    };
    if *recorded == Some(index) {
        return;
    }
    match session.record_index(index) {
        Ok(()) => *recorded = Some(index),
        Err(e) => tracing::warn!(error = %e, index, "Failed to persist cue index"),
    }
}
