//! Integration tests for the srp command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::fixtures_dir;

/// `srp` running inside the fixtures directory with a private config path.
fn srp(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("srp").unwrap();
    cmd.current_dir(fixtures_dir())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let dir = TempDir::new().unwrap();
    let output = srp(&dir).args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn no_arguments_shows_usage() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("info")
                .and(predicate::str::contains("frames"))
                .and(predicate::str::contains("pose"))
                .and(predicate::str::contains("play"))
                .and(predicate::str::contains("completions")),
        );
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_srp"));
}

// ============================================================================
// info
// ============================================================================

#[test]
fn info_prints_header_summary() {
    let dir = TempDir::new().unwrap();
    let output = srp(&dir).args(["info", "zone_v8.replay"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout, @r###"
zone_v8.replay
  version:     8
  map:         bhop_zone
  style:       1
  track:       0
  frames:      3
  tick rate:   100
  finish time: 0.020s
  author:      12345
  zone offset: (100.00, 0.00)
  size:        194 B
"###);
}

#[test]
fn info_shows_legacy_author_text_and_default_tick_rate() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["info", "legacy_v1.replay"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("author:      [U:1:12345]")
                .and(predicate::str::contains("tick rate:   100 (default)")),
        );
}

#[test]
fn info_reports_bad_files_but_prints_the_rest() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["info", "bad_tag.replay", "zone_v8.replay", "truncated_v8.replay"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bhop_zone"))
        .stderr(
            predicate::str::contains("Unrecognized replay format")
                .and(predicate::str::contains("frame #1"))
                .and(predicate::str::contains("2 of 3 files could not be decoded")),
        );
}

#[test]
fn info_json_serializes_headers() {
    let value = run_json(&["info", "--json", "zone_v8.replay", "legacy_v1.replay"]);
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["header"]["map_name"], "bhop_zone");
    assert_eq!(entries[0]["size"], 194);
    assert_eq!(entries[1]["header"]["author_text"], "[U:1:12345]");
}

#[test]
fn info_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["info", "nope.replay"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read replay"));
}

// ============================================================================
// frames / pose
// ============================================================================

#[test]
fn frames_range_is_clamped() {
    let value = run_json(&["frames", "zone_v8.replay", "--from", "1", "--to", "99", "--json"]);
    let frames = value.as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["index"], 1);
    assert_eq!(frames[1]["origin"]["x"], 20.0);
    assert_eq!(frames[1]["buttons"], 2);
}

#[test]
fn frames_text_has_one_row_per_frame() {
    let dir = TempDir::new().unwrap();
    let output = srp(&dir).args(["frames", "legacy_v1.replay"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().next().unwrap().contains("pitch"));
}

#[test]
fn frames_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["frames", "zone_v8.replay", "--from", "2", "--to", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--from"));
}

#[test]
fn pose_applies_zone_offset() {
    let value = run_json(&["pose", "zone_v8.replay", "--at", "0.005", "--json"]);
    let x = value["world"]["position"]["x"].as_f64().unwrap();
    assert!((x - 105.0).abs() < 1e-3, "x = {}", x);
    assert_eq!(value["axis"], "source");
    assert_eq!(value["pose"]["frame_index"], 0);
}

#[test]
fn pose_uses_requested_axis() {
    let value = run_json(&["pose", "zone_v8.replay", "--at", "10", "--axis", "y-up", "--json"]);
    assert_eq!(value["axis"], "y-up");
    assert_eq!(value["world"]["position"]["x"], 120.0);
    assert_eq!(value["world"]["position"]["y"], 64.0);
}

#[test]
fn pose_axis_defaults_to_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[world]\naxis = \"y-up\"\n").unwrap();
    srp(&dir)
        .args(["pose", "zone_v8.replay", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[y-up]"));
}

// ============================================================================
// play --headless
// ============================================================================

#[test]
fn headless_play_prints_json_lines_until_the_end() {
    let dir = TempDir::new().unwrap();
    let output = srp(&dir)
        .args(["play", "zone_v8.replay", "--headless", "--fast"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["position"]["x"], 100.0);
    assert_eq!(lines[2]["position"]["x"], 120.0);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(dir.path().join("config.toml").exists());

    srp(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    srp(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_prints_effective_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[playback]\nspeed = 2.0\n").unwrap();
    srp(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("speed = 2.0")
                .and(predicate::str::contains("fallback_tick_rate = 100.0"))
                .and(predicate::str::contains("axis = \"source\"")),
        );
}

#[test]
fn config_path_prints_override() {
    let dir = TempDir::new().unwrap();
    srp(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[world]\naxis = 3\n").unwrap();
    srp(&dir)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
