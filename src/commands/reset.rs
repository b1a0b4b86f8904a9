//! Reset command handler

use anyhow::Result;
use subprompt::theme::current_theme;
use subprompt::Config;

use super::{open_session, prompt_confirmation};

/// Clear the saved cues and position, keeping the theme color.
pub fn handle(yes: bool, config: &Config) -> Result<()> {
    let theme = current_theme();
    let mut session = open_session(config)?;

    if !session.is_active() {
        println!("{}", theme.primary_text("No saved session."));
        return Ok(());
    }

    if !yes && !prompt_confirmation("Discard the saved subtitles and position?")? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    session.reset()?;
    println!("{}", theme.success_text("Session reset."));
    Ok(())
}
