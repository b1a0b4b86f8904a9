//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod info;
pub mod play;
pub mod reset;
pub mod show;
pub mod theme;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use subprompt::storage::FileStore;
use subprompt::theme::{current_theme, set_active_accent, ThemeColor};
use subprompt::{Config, Session};

/// Open the persisted session in the configured state directory.
pub fn open_session(config: &Config) -> Result<Session<FileStore>> {
    let dir = config.state_dir()?;
    let store = FileStore::open(&dir)
        .with_context(|| format!("Failed to open session state in {}", dir.display()))?;
    Ok(Session::open(store))
}

/// Make the saved theme color (or the configured accent) the active one.
///
/// An unparseable saved color is ignored in favor of the config.
pub fn apply_theme(config: &Config, saved: Option<&str>) {
    let color = saved
        .and_then(ThemeColor::parse)
        .or_else(|| ThemeColor::parse(&config.theme.accent));
    match color {
        Some(color) => set_active_accent(color.color()),
        None => tracing::warn!(accent = %config.theme.accent, "Invalid accent color in config"),
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
pub fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to confirm")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
