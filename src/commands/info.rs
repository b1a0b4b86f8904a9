//! Info command handler

use std::path::Path;

use anyhow::Result;
use subprompt::session::read_cue_file;
use subprompt::subtitle::timestamp::{format_ms, seconds_to_ms};
use subprompt::theme::current_theme;
use subprompt::CueStore;

/// Build the summary lines for a cue store.
pub fn summarize(cues: &CueStore) -> Vec<String> {
    let mut lines = vec![
        format!("Cues:     {}", cues.len()),
        format!(
            "Duration: {}",
            format_ms(seconds_to_ms(cues.duration_seconds()))
        ),
    ];

    let gaps = cues.gaps();
    if gaps.is_empty() {
        lines.push("Gaps:     none".to_string());
    } else {
        lines.push(format!("Gaps:     {}", gaps.len()));
        for (after, seconds) in gaps {
            lines.push(format!(
                "  after cue {:>4}: {:.3}s",
                after + 1,
                seconds
            ));
        }
    }
    lines
}

/// Print a summary of `file`.
pub fn handle(file: &Path) -> Result<()> {
    let cues = CueStore::new(read_cue_file(file)?);
    let theme = current_theme();

    println!("{}", theme.accent_text(&file.display().to_string()));
    for line in summarize(&cues) {
        println!("{}", theme.primary_text(&line));
    }
    Ok(())
}
