//! Configuration management
//!
//! Settings live in a TOML file under the user's config directory
//! (`~/.config/subprompt/config.toml` on Linux). Every field has a default,
//! so a missing or partial file is fine.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SUBPROMPT_CONFIG_DIR";
/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "SUBPROMPT_STATE_DIR";

/// Default accent color (a saturated purple).
pub const DEFAULT_ACCENT: &str = "#8936FF";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Player behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Clock tick and redraw interval in milliseconds
    pub tick_ms: u64,
    /// Start the clock as soon as subtitles are shown
    pub autostart: bool,
    /// Show `start - end` under the active cue
    pub show_timestamps: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            autostart: false,
            show_timestamps: true,
        }
    }
}

impl PlayerConfig {
    /// Tick interval clamped to something a terminal can keep up with.
    pub fn tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms.clamp(5, 1000))
    }
}

/// Theme defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color used when no color has been saved with `subprompt theme`
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

/// Where persisted state and logs are written
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("subprompt"))
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Directory for persisted session state and the log file.
    ///
    /// Precedence: `storage.state_dir`, then `SUBPROMPT_STATE_DIR`, then the
    /// platform's local data directory.
    pub fn state_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.state_dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = std::env::var_os(STATE_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::data_local_dir().context("Could not determine data directory")?;
        Ok(base.join("subprompt"))
    }
}
