//! Integration tests for session persistence across restarts

use std::time::Instant;

use subprompt::config::PlayerConfig;
use subprompt::player::PlayerState;
use subprompt::session::read_cue_file;
use subprompt::storage::FileStore;
use subprompt::{LoadError, Session, SessionState};
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, load_fixture};

fn open(dir: &TempDir) -> Session<FileStore> {
    Session::open(FileStore::open(dir.path()).expect("open store"))
}

#[test]
fn fresh_state_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    assert_eq!(open(&dir).state(), &SessionState::Empty);
}

#[test]
fn loaded_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    let loaded = session
        .load_file(&fixtures_dir().join("sample.srt"))
        .unwrap();
    session.record_index(1).unwrap();
    drop(session);

    let restored = open(&dir);
    assert_eq!(restored.cues(), Some(&loaded));
    assert_eq!(restored.start_index(), Some(1));
}

#[test]
fn restored_index_positions_player_at_cue_start() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.load(&load_fixture("sample.srt")).unwrap();
    session.record_index(2).unwrap();

    let restored = open(&dir);
    let now = Instant::now();
    let state = PlayerState::new_at(
        now,
        restored.cues().unwrap().clone(),
        restored.start_index(),
        &PlayerConfig::default(),
    );
    assert_eq!(state.elapsed_ms_at(now), 4_000);
    assert_eq!(state.current_cue().unwrap().text, "Thanks for watching!");
    assert!(!state.is_running());
}

#[test]
fn new_load_replaces_cues_and_clears_index() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.load(&load_fixture("sample.srt")).unwrap();
    session.record_index(2).unwrap();

    session
        .load_file(&fixtures_dir().join("windows.srt"))
        .unwrap();

    let restored = open(&dir);
    assert_eq!(restored.cues().unwrap().len(), 2);
    assert_eq!(restored.start_index(), None);
}

#[test]
fn invalid_file_leaves_previous_session() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.load(&load_fixture("sample.srt")).unwrap();
    session.record_index(1).unwrap();

    let err = session
        .load_file(&fixtures_dir().join("invalid.srt"))
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidFile(_)));
    assert!(err.to_string().starts_with("Invalid SRT file"));

    let restored = open(&dir);
    assert_eq!(restored.cues().unwrap().len(), 3);
    assert_eq!(restored.start_index(), Some(1));
}

#[test]
fn reset_keeps_theme_across_restart() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.load(&load_fixture("sample.srt")).unwrap();
    session.set_theme_color("#ff0000").unwrap();
    session.reset().unwrap();

    let mut restored = open(&dir);
    assert_eq!(restored.state(), &SessionState::Empty);
    assert_eq!(restored.theme_color().as_deref(), Some("#ff0000"));
}

#[test]
fn corrupt_state_file_restores_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(FileStore::FILE_NAME), "{ nope").unwrap();

    let mut session = open(&dir);
    assert_eq!(session.state(), &SessionState::Empty);

    session.load(&load_fixture("sample.srt")).unwrap();
    let restored = open(&dir);
    assert_eq!(restored.cues().unwrap().len(), 3);
}

#[test]
fn read_cue_file_does_not_touch_sessions() {
    let cues = read_cue_file(&fixtures_dir().join("sample.srt")).unwrap();
    assert_eq!(cues.len(), 3);
    assert_eq!(cues[1].start_time, "00:00:02,500");
    assert_eq!(cues[1].text, "<i>Tonight</i> we talk about\n<b>subtitles</b>.");
}
