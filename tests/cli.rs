use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".finboard").join("config.json")
}

const BINARY_NAME: &str = "finboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Snapshot renders the sample dashboard with the traditional total.
fn snapshot_prints_sample_dashboard() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("snapshot")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Total Traditional Value"))
        .stdout(contains("$46,481.96"))
        .stdout(contains("Welcome back,"));
}

#[test]
/// Loading insights hides the cards.
fn snapshot_with_loading_insights() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--insights-loading"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Loading insights..."))
        .stdout(contains("Powered by AI").not());
}

#[test]
/// An unknown asset tab is rejected by argument parsing.
fn snapshot_rejects_unknown_asset_tab() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--asset-tab", "stocks"])
        .assert()
        .failure();
}

#[test]
/// Exported sample data can be fed back into the snapshot command.
fn export_sample_round_trips_through_snapshot() {
    let tmp = temp_config_dir();
    let data_path = tmp.path().join("sample.json");

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("export-sample")
        .arg(&data_path)
        .env("HOME", tmp.path())
        .assert()
        .success();
    assert!(data_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--asset-tab", "crypto", "--data"])
        .arg(&data_path)
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Total Crypto Value"))
        .stdout(contains("Add Crypto"));
}

#[test]
/// Snapshot fails cleanly when the data file is missing.
fn snapshot_missing_data_file_fails() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--data"])
        .arg(tmp.path().join("missing.json"))
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Failed to load dashboard data").count(1));
}

#[test]
/// init-config writes the config file, and its user name reaches the header.
fn init_config_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["init-config", "--user", "Jordan"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Config written"));

    // Confirm the file was created
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("Jordan"));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("snapshot")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Jordan"));
}
