//! End-to-end tests of the `subsync` binary: exit codes and reported jobs.

use assert_cmd::Command;
use predicates::prelude::*;

fn subsync() -> Command {
    Command::cargo_bin("subsync").unwrap()
}

#[test]
fn version_flag_prints_version() {
    subsync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_prints_help() {
    subsync()
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn missing_required_flag_exits_2() {
    subsync()
        .args(["sync", "--sub", "a.srt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--ref"));
}

#[test]
fn bad_log_level_exits_2() {
    subsync()
        .args(["--log-level", "bogus", "settings"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized level bogus"));
}

#[test]
fn bad_dump_source_exits_2() {
    subsync()
        .args(["--dump-words", "nowhere:x.txt", "settings"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized source nowhere"));
}

#[test]
fn sync_reports_planned_job() {
    subsync()
        .args(["sync", "--sub", "a.srt", "--ref", "b.mp4", "--sub-stream", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: a.srt"))
        .stdout(predicate::str::contains("path: b.mp4"))
        .stdout(predicate::str::contains("stream: 2"));
}

#[test]
fn sync_summary_when_quiet() {
    subsync()
        .args(["--verbose", "0", "sync", "--sub", "a.srt", "--ref", "b.mp4", "--out", "c.srt"])
        .assert()
        .success()
        .stdout("a.srt <- b.mp4 => c.srt\n");
}

#[test]
fn malformed_channels_fail() {
    subsync()
        .args(["sync", "--sub", "a.srt", "--ref", "b.mkv", "--ref-channels", "XX"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown channel XX"));
}

#[test]
fn batch_reports_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.yaml");
    std::fs::write(
        &path,
        "- sub: {path: one.srt}\n  ref: {path: one.mkv}\n- sub: {path: two.srt}\n  ref: {path: two.mkv}\n",
    )
    .unwrap();

    subsync()
        .args(["--verbose", "0", "batch"])
        .arg(&path)
        .assert()
        .success()
        .stdout("one.srt <- one.mkv => -\ntwo.srt <- two.mkv => -\n");
}

#[test]
fn settings_prints_effective_values() {
    subsync()
        .args(["--window-size", "120", "settings", "--effort", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"windowSize\": 120.0"))
        .stdout(predicate::str::contains("\"minEffort\": 0.25"));
}

#[test]
fn log_file_receives_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("subsync.log");

    subsync()
        .args(["--log-level", "DEBUG", "--log-file"])
        .arg(&log)
        .args(["sync", "--sub", "a.srt", "--ref", "b.mp4"])
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Installing 1 task(s)"), "{contents}");
}
