//! Play command handler

use std::path::Path;

use anyhow::Result;
use subprompt::player::{self, PlayerOutcome};
use subprompt::theme::current_theme;
use subprompt::Config;

use super::{apply_theme, open_session};

/// Load `file` (if given) into the session and run the player.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: Option<&Path>, config: &Config) -> Result<()> {
    let mut session = open_session(config)?;
    apply_theme(config, session.theme_color().as_deref());
    let theme = current_theme();

    if let Some(path) = file {
        // A bad file leaves the previous session in place
        let cues = session.load_file(path)?;
        tracing::info!(path = %path.display(), cues = cues.len(), "Playing file");
    }

    if !session.is_active() {
        println!(
            "{}",
            theme.primary_text("No subtitles loaded. Run `subprompt play <FILE.srt>` to start.")
        );
        return Ok(());
    }

    match player::run(&mut session, &config.player, &theme)? {
        PlayerOutcome::Quit => {}
        PlayerOutcome::Reset => {
            session.reset()?;
            println!("{}", theme.success_text("Session reset."));
        }
    }
    Ok(())
}
