//! Structured logging setup.
//!
//! The player owns the terminal, so logs go to `subprompt.log` in the state
//! directory instead of stderr. `SUBPROMPT_LOG` takes an `EnvFilter`
//! directive; without it the level is `info` (or `debug` with `--verbose`).

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SUBPROMPT_LOG";

/// Log file name inside the state directory.
pub const LOG_FILE: &str = "subprompt.log";

/// Build the log filter from `SUBPROMPT_LOG`, else from `verbose`.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "subprompt=debug"
        } else {
            "subprompt=info"
        })
    })
}

/// Initialize the global subscriber writing to `<state_dir>/subprompt.log`.
///
/// Returns the log path. Logging is best effort: if the file cannot be
/// opened the subscriber is simply not installed. Calling this twice is a
/// no-op the second time.
pub fn init(state_dir: &Path, verbose: bool) -> Option<PathBuf> {
    if fs::create_dir_all(state_dir).is_err() {
        return None;
    }
    let path = state_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = init(dir.path(), false).expect("log path");
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), LOG_FILE);

        // Second call must not panic
        init(dir.path(), true);
    }

    #[test]
    fn filter_mentions_crate() {
        let filter = filter(true);
        assert!(format!("{filter}").contains("subprompt"));
    }
}
