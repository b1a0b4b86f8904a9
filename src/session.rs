//! Session lifecycle: restore, load and reset.
//!
//! ```text
//! Loading ──restore──▶ Empty ──load──▶ Active
//!     └──────restore──────────────────▶ Active ──reset──▶ Empty
//!                                        Active ──load──▶ Active (replaced)
//! ```
//!
//! The session owns the injected [`KeyValueStore`] and keeps it in step with
//! the in-memory state: loads write the cues and clear the stored index,
//! resets clear both. The theme color is never touched here.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, StoreError};
use crate::storage::{KeyValueStore, PersistedState};
use crate::subtitle::{srt, Cue, CueStore};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Reading persisted state; only seen before `restore` resolves
    Loading,
    /// No cues loaded
    Empty,
    /// Cues loaded, with an optional index to resume from
    Active {
        cues: CueStore,
        start_index: Option<usize>,
    },
}

/// Read and parse a subtitle file without touching any session.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_cue_file(path: &Path) -> Result<Vec<Cue>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(srt::parse(&String::from_utf8_lossy(&bytes))?)
}

pub struct Session<S: KeyValueStore> {
    store: S,
    state: SessionState,
}

impl<S: KeyValueStore> Session<S> {
    /// A session in `Loading`, not yet resolved against `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SessionState::Loading,
        }
    }

    /// Create a session and immediately [`restore`](Self::restore) it.
    pub fn open(store: S) -> Self {
        let mut session = Self::new(store);
        session.restore();
        session
    }

    /// Resolve `Loading` into `Empty` or `Active` from persisted state.
    ///
    /// A missing, malformed or out-of-range index means "start from zero".
    pub fn restore(&mut self) {
        let persisted = PersistedState::new(&mut self.store);
        self.state = match persisted.cues() {
            Some(cues) => {
                let start_index = persisted.current_index().filter(|&i| i < cues.len());
                tracing::info!(cues = cues.len(), ?start_index, "Restored session");
                SessionState::Active {
                    cues: CueStore::new(cues),
                    start_index,
                }
            }
            None => {
                tracing::debug!("No persisted session");
                SessionState::Empty
            }
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn cues(&self) -> Option<&CueStore> {
        match &self.state {
            SessionState::Active { cues, .. } => Some(cues),
            _ => None,
        }
    }

    pub fn start_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Active { start_index, .. } => *start_index,
            _ => None,
        }
    }

    /// Parse `text` and make it the session's cue store.
    ///
    /// On failure nothing changes, in memory or in the store.
    pub fn load(&mut self, text: &str) -> Result<CueStore, LoadError> {
        let cues = srt::parse(text)?;
        self.install(cues)
    }

    /// Read `path` and [`load`](Self::load) its contents.
    pub fn load_file(&mut self, path: &Path) -> Result<CueStore, LoadError> {
        let cues = read_cue_file(path)?;
        self.install(cues)
    }

    fn install(&mut self, cues: Vec<Cue>) -> Result<CueStore, LoadError> {
        PersistedState::new(&mut self.store).replace_session(&cues)?;

        tracing::info!(cues = cues.len(), "Loaded subtitles");
        let cues = CueStore::new(cues);
        self.state = SessionState::Active {
            cues: cues.clone(),
            start_index: None,
        };
        Ok(cues)
    }

    /// Discard cues and index, returning to `Empty`.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        PersistedState::new(&mut self.store).clear_session()?;
        self.state = SessionState::Empty;
        tracing::info!("Session reset");
        Ok(())
    }

    /// Remember the last active cue index.
    pub fn record_index(&mut self, index: usize) -> Result<(), StoreError> {
        if let SessionState::Active { start_index, .. } = &mut self.state {
            *start_index = Some(index);
        }
        PersistedState::new(&mut self.store).set_current_index(index)
    }

    pub fn theme_color(&mut self) -> Option<String> {
        PersistedState::new(&mut self.store).theme_color()
    }

    pub fn set_theme_color(&mut self, color: &str) -> Result<(), StoreError> {
        PersistedState::new(&mut self.store).set_theme_color(color)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
