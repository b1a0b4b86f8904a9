//! Show command handler

use std::path::Path;

use anyhow::Result;
use subprompt::session::read_cue_file;
use subprompt::subtitle::{active_cue, markup, timestamp};
use subprompt::theme::current_theme;

/// Text printed when no cue is active at the timestamp.
pub const NO_CUE: &str = "(no cue)";

/// Render the cue active at `at` in `cues`, or `None` in a gap.
pub fn render_at(cues: &[subprompt::Cue], at_ms: u64, html: bool) -> Option<String> {
    let cue = active_cue(at_ms, cues)?;
    Some(if html {
        markup::to_html(&cue.text)
    } else {
        markup::to_plain(&cue.text)
    })
}

/// Print the cue in `file` active at `at_ms`.
pub fn handle(file: &Path, at_ms: u64, html: bool) -> Result<()> {
    tracing::debug!(file = %file.display(), at = %timestamp::format_ms(at_ms), "Show");
    let cues = read_cue_file(file)?;

    match render_at(&cues, at_ms, html) {
        Some(text) => println!("{}", text),
        None => println!("{}", current_theme().secondary_text(NO_CUE)),
    }
    Ok(())
}
