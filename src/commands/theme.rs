//! Theme command handler

use anyhow::{bail, Result};
use subprompt::theme::{current_theme, set_active_accent, ThemeColor};
use subprompt::Config;

use super::{apply_theme, open_session};

/// Show the saved accent color, or validate and save a new one.
pub fn handle(color: Option<&str>, config: &Config) -> Result<()> {
    let mut session = open_session(config)?;
    let saved = session.theme_color();
    apply_theme(config, saved.as_deref());

    let Some(input) = color else {
        let (css, source) = match saved {
            Some(saved) => (saved, "saved"),
            None => (config.theme.accent.clone(), "config default"),
        };
        println!("{} ({})", current_theme().accent_text(&css), source);
        return Ok(());
    };

    let Some(parsed) = ThemeColor::parse(input) else {
        bail!("Invalid color '{}' (use #rgb, #rrggbb or a color name)", input);
    };
    session.set_theme_color(parsed.css())?;
    set_active_accent(parsed.color());
    tracing::info!(color = parsed.css(), "Theme color saved");

    let theme = current_theme();
    println!(
        "{} {}",
        theme.success_text("Theme color set to"),
        theme.accent_text(parsed.css())
    );
    Ok(())
}
