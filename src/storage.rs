//! Persisted session state.
//!
//! State is a flat string-to-string map behind the [`KeyValueStore`] trait.
//! [`FileStore`] writes it through to a JSON file; [`MemoryStore`] keeps it
//! in memory. [`PersistedState`] layers typed accessors on top of either.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::subtitle::Cue;

/// Key holding the JSON-encoded cue list.
pub const KEY_CUES: &str = "cues";
/// Key holding the last active cue index as a decimal string.
pub const KEY_CURRENT_INDEX: &str = "current_index";
/// Key holding the accent color as a CSS color string.
pub const KEY_THEME_COLOR: &str = "theme_color";

/// String-valued key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file-backed store. Every write is flushed to disk immediately.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// File name of the state file inside the state directory.
    pub const FILE_NAME: &'static str = "state.json";

    /// Open the state file in `dir`, starting empty if it does not exist.
    ///
    /// A file that does not decode is treated as empty; the next write
    /// replaces it.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(Self::FILE_NAME);
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt state file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened state store");
        Ok(Self { path, entries })
    }

    /// Put `key` back to `previous` after a failed flush.
    fn restore_entry(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.entries.insert(key.to_string(), value),
            None => self.entries.remove(key),
        };
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            self.restore_entry(key, previous);
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if let Some(previous) = self.entries.remove(key) {
            if let Err(e) = self.flush() {
                self.restore_entry(key, Some(previous));
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Typed view over a [`KeyValueStore`].
pub struct PersistedState<'a> {
    store: &'a mut dyn KeyValueStore,
}

impl<'a> PersistedState<'a> {
    pub fn new(store: &'a mut dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Persisted cues. Absent or undecodable data reads as `None`.
    pub fn cues(&self) -> Option<Vec<Cue>> {
        let raw = self.store.get(KEY_CUES)?;
        match serde_json::from_str::<Vec<Cue>>(&raw) {
            Ok(cues) if !cues.is_empty() => Some(cues),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring undecodable persisted cues");
                None
            }
        }
    }

    pub fn set_cues(&mut self, cues: &[Cue]) -> Result<(), StoreError> {
        let json = serde_json::to_string(cues)?;
        self.store.set(KEY_CUES, &json)
    }

    /// Last active cue index. Anything but a plain decimal reads as `None`.
    pub fn current_index(&self) -> Option<usize> {
        let raw = self.store.get(KEY_CURRENT_INDEX)?;
        match raw.trim().parse::<usize>() {
            Ok(idx) => Some(idx),
            Err(_) => {
                tracing::debug!(value = %raw, "Ignoring malformed persisted index");
                None
            }
        }
    }

    pub fn set_current_index(&mut self, index: usize) -> Result<(), StoreError> {
        self.store.set(KEY_CURRENT_INDEX, &index.to_string())
    }

    /// Make `cues` the stored session, starting from no index.
    ///
    /// The index is dropped before the cues are written and put back if the
    /// write fails, so the old cues never pair with a new index or the
    /// new cues with an old one.
    pub fn replace_session(&mut self, cues: &[Cue]) -> Result<(), StoreError> {
        let json = serde_json::to_string(cues)?;
        let previous_index = self.store.get(KEY_CURRENT_INDEX);
        self.store.remove(KEY_CURRENT_INDEX)?;

        if let Err(e) = self.store.set(KEY_CUES, &json) {
            if let Some(index) = previous_index {
                if let Err(restore) = self.store.set(KEY_CURRENT_INDEX, &index) {
                    tracing::warn!(error = %restore, "Could not restore stored index");
                }
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn theme_color(&self) -> Option<String> {
        self.store.get(KEY_THEME_COLOR).filter(|c| !c.trim().is_empty())
    }

    pub fn set_theme_color(&mut self, color: &str) -> Result<(), StoreError> {
        self.store.set(KEY_THEME_COLOR, color)
    }

    /// Drop cues and index. The theme color is kept.
    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.store.remove(KEY_CUES)?;
        self.store.remove(KEY_CURRENT_INDEX)
    }
}
