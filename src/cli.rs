//! CLI definitions for subprompt
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::subtitle::timestamp::parse_to_ms;

/// Version string: `0.1.0 (abc1234 2026-01-01)` for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SUBPROMPT_BUILD_DATE"),
    ")"
);

/// Version string for official builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal subtitle teleprompter for SRT files
#[derive(Parser, Debug)]
#[command(name = "subprompt")]
#[command(version = VERSION)]
#[command(about = "Terminal subtitle teleprompter for SRT files")]
#[command(
    long_about = "Show SRT subtitles one cue at a time against a running clock.

The last loaded file and the position within it are remembered, so running
`subprompt play` again resumes where you left off."
)]
pub struct Cli {
    /// Write debug-level logs to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play subtitles in the terminal
    #[command(long_about = "Load FILE (replacing the saved session) and play it.

Without FILE, resume the saved session from its last cue.")]
    Play {
        /// Subtitle file (.srt)
        file: Option<PathBuf>,
    },

    /// Print the cue active at a timestamp
    Show {
        /// Subtitle file (.srt)
        file: PathBuf,
        /// Timestamp in HH:MM:SS,mmm format
        #[arg(long, value_name = "TIMESTAMP", value_parser = parse_to_ms)]
        at: u64,
        /// Print sanitized HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Summarize a subtitle file
    Info {
        /// Subtitle file (.srt)
        file: PathBuf,
    },

    /// Forget the saved cues and position (theme color is kept)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set the accent color
    Theme {
        /// CSS color: #rgb, #rrggbb or a name like "cyan"
        color: Option<String>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration file in $EDITOR
    Edit,
}
