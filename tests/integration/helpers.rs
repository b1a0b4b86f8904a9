//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Isolated config and state directories for one CLI test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// `subprompt` command with the sandbox's directories and no color.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_subprompt"));
        cmd.env("SUBPROMPT_STATE_DIR", self.state_dir())
            .env("SUBPROMPT_CONFIG_DIR", self.config_dir())
            .env("NO_COLOR", "1")
            .env_remove("SUBPROMPT_LOG");
        cmd
    }

    /// Run `subprompt` and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to execute subprompt");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }

    /// Contents of the persisted state file, parsed.
    pub fn state_json(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.state_dir().join("state.json"))
            .expect("state.json should exist");
        serde_json::from_str(&text).expect("state.json should be valid JSON")
    }
}
