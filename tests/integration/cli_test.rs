//! Integration tests for the subprompt CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixtures_dir, Sandbox};

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

// ============================================================================
// Help and Usage
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--help"]);

    assert_eq!(exit_code, 0);
    for cmd in ["play", "show", "info", "reset", "theme", "config", "completions"] {
        assert!(stdout.contains(cmd), "help should mention {}", cmd);
    }
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("subprompt")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "subprompt {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["dance"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn show_without_timestamp_is_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["show", &fixture("sample.srt")]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--at"));
}

#[test]
fn show_with_malformed_timestamp_is_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) =
        sandbox.run(&["show", &fixture("sample.srt"), "--at", "00:00:61,000"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("00:00:61,000"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn show_prints_active_cue_as_plain_text() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) =
        sandbox.run(&["show", &fixture("sample.srt"), "--at", "00:00:03,000"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Tonight we talk about
    subtitles.
    ");
}

#[test]
fn show_html_keeps_allowed_markup() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&[
        "show",
        &fixture("sample.srt"),
        "--at",
        "00:00:02,500",
        "--html",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim_end(),
        "<i>Tonight</i> we talk about<br /><b>subtitles</b>."
    );
}

#[test]
fn show_end_boundary_is_exclusive() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = sandbox.run(&["show", &fixture("sample.srt"), "--at", "00:00:01,999"]);
    assert_eq!(stdout.trim_end(), "Welcome to the show.");

    let (stdout, _stderr, _) = sandbox.run(&["show", &fixture("sample.srt"), "--at", "00:00:02,000"]);
    assert_eq!(stdout.trim_end(), "(no cue)");
}

#[test]
fn show_back_to_back_cues_switch_at_boundary() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = sandbox.run(&["show", &fixture("sample.srt"), "--at", "00:00:04,000"]);
    assert_eq!(stdout.trim_end(), "Thanks for watching!");
}

#[test]
fn show_handles_bom_crlf_and_position_hints() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) =
        sandbox.run(&["show", &fixture("windows.srt"), "--at", "00:00:03,500"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), "Colored text");

    let (stdout, _stderr, _) = sandbox.run(&["show", &fixture("windows.srt"), "--at", "00:00:01,000"]);
    assert_eq!(stdout.trim_end(), "Windows line endings");
}

#[test]
fn show_invalid_file_fails() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) =
        sandbox.run(&["show", &fixture("invalid.srt"), "--at", "00:00:00,000"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid SRT file"), "stderr: {}", stderr);
}

#[test]
fn show_missing_file_fails() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) =
        sandbox.run(&["show", "/nonexistent/subs.srt", "--at", "00:00:00,000"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("/nonexistent/subs.srt"));
}

// ============================================================================
// info
// ============================================================================

#[test]
fn info_summarizes_file() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["info", &fixture("sample.srt")]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Cues:     3"));
    assert!(stdout.contains("Duration: 00:00:06,500"));
    assert!(stdout.contains("Gaps:     1"));
    assert!(stdout.contains("after cue    1: 0.500s"));
}

// ============================================================================
// play (non-interactive paths only)
// ============================================================================

#[test]
fn play_without_session_explains_how_to_start() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["play"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No subtitles loaded"));
}

#[test]
fn play_invalid_file_reports_error_and_keeps_state_empty() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["play", &fixture("invalid.srt")]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid SRT file"));

    let (stdout, _stderr, _) = sandbox.run(&["play"]);
    assert!(stdout.contains("No subtitles loaded"));
}

// ============================================================================
// theme
// ============================================================================

#[test]
fn theme_defaults_to_config_accent() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["theme"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end(), "#8936FF (config default)");
}

#[test]
fn theme_set_persists_normalized_color() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["theme", "#00FF88"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("#00ff88"));

    let (stdout, _stderr, _) = sandbox.run(&["theme"]);
    assert_eq!(stdout.trim_end(), "#00ff88 (saved)");
    assert_eq!(sandbox.state_json()["theme_color"], "#00ff88");
}

#[test]
fn theme_rejects_invalid_color() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["theme", "not-a-color"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid color"));
}

// ============================================================================
// reset
// ============================================================================

#[test]
fn reset_without_session_is_a_no_op() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["reset", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No saved session"));
}

#[test]
fn reset_clears_cues_but_keeps_theme() {
    let sandbox = Sandbox::new();
    sandbox.run(&["theme", "red"]);

    // Seed a session the same way `play FILE` does, without a terminal
    let store = subprompt::storage::FileStore::open(&sandbox.state_dir()).unwrap();
    let mut session = subprompt::Session::open(store);
    session
        .load_file(&fixtures_dir().join("sample.srt"))
        .unwrap();
    session.record_index(2).unwrap();

    // Non-interactive without --yes declines
    let (stdout, _stderr, exit_code) = sandbox.run(&["reset"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made"));
    assert!(sandbox.state_json().get("cues").is_some());

    let (stdout, _stderr, exit_code) = sandbox.run(&["reset", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Session reset"));

    let state = sandbox.state_json();
    assert!(state.get("cues").is_none());
    assert!(state.get("current_index").is_none());
    assert_eq!(state["theme_color"], "red");
}

#[test]
fn corrupt_state_file_does_not_block_commands() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.state_dir()).unwrap();
    std::fs::write(sandbox.state_dir().join("state.json"), "{ nope").unwrap();

    let (stdout, stderr, exit_code) = sandbox.run(&["reset", "--yes"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("No saved session"));

    let (stdout, _stderr, exit_code) = sandbox.run(&["play"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No subtitles loaded"));

    let (_stdout, _stderr, exit_code) = sandbox.run(&["theme", "#00ff00"]);
    assert_eq!(exit_code, 0);
    assert_eq!(sandbox.state_json()["theme_color"], "#00ff00");
}

// ============================================================================
// config and completions
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("tick_ms = 20"));
    assert!(stdout.contains("accent = \"#8936FF\""));
}

#[test]
fn invalid_config_file_is_reported() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(sandbox.config_dir().join("config.toml"), "[player\n").unwrap();

    let (_stdout, stderr, exit_code) = sandbox.run(&["config", "show"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn verbose_log_records_config_source() {
    let sandbox = Sandbox::new();
    let (_stdout, _stderr, exit_code) = sandbox.run(&["-v", "info", &fixture("sample.srt")]);
    assert_eq!(exit_code, 0);

    let log = std::fs::read_to_string(sandbox.state_dir().join("subprompt.log")).unwrap();
    assert!(log.contains("No config file, using defaults"), "log: {}", log);
}

#[test]
fn completions_generate_for_bash() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["completions", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("subprompt"));
    assert!(stdout.contains("play"));
}
