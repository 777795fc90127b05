//! Integration tests for the sketchlist CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{filled, listing_body, MockDevice};

/// sketchlist with colors off and config/log dirs inside `home`.
fn sketchlist(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchlist").expect("sketchlist binary");
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("SKETCHLIST_SERVER")
        .env_remove("SKETCHLIST_LOG");
    cmd
}

fn device_listing() -> String {
    listing_body(&[
        ("/imgs/cat.txt", filled('A').as_str()),
        ("/imgs/dog.txt", filled('B').as_str()),
        ("/imgs/bad.txt", "AB"),
    ])
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn delete_without_names_is_usage_error() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .arg("delete")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<NAME>"));
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn list_prints_names_and_marks_broken() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start(&device_listing());

    sketchlist(&home)
        .args(["list", "--server", device.url().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat\n"))
        .stdout(predicate::str::contains("dog\n"))
        .stdout(predicate::str::contains("bad (undecodable"))
        .stdout(predicate::str::contains("3 sketches, 1 undecodable"));
}

#[test]
fn list_preview_respects_no_color() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start(&device_listing());

    sketchlist(&home)
        .args(["list", "--preview", "--server", device.url().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("▀".repeat(16)))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn list_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start(&device_listing());

    let output = sketchlist(&home)
        .args(["list", "--json"])
        .env("SKETCHLIST_SERVER", device.url())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "cat");
    assert_eq!(items[2]["valid"], false);
}

#[test]
fn list_against_unreachable_server_fails() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .args(["list", "--server", "http://127.0.0.1:9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch the sketch list"));
}

// ============================================================================
// Deletion
// ============================================================================

#[test]
fn delete_without_yes_refuses_when_not_a_tty() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start("");

    sketchlist(&home)
        .args(["delete", "cat", "--server", device.url().as_str()])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"));
    assert!(device.requests().is_empty());
}

#[test]
fn delete_with_yes_sends_request() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start("");

    sketchlist(&home)
        .args(["delete", "cat", "dog", "--yes", "--server", device.url().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 sketch(es)."));
    assert_eq!(device.requests(), vec!["/delete.html?sketchlist=cat,dog,"]);
}

#[test]
fn delete_rejects_names_with_separators() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .args(["delete", "cat,dog", "--yes", "--server", "http://127.0.0.1:9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid sketch name"));
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_writes_png_per_valid_sketch() {
    let home = TempDir::new().unwrap();
    let device = MockDevice::start(&device_listing());
    let out = home.path().join("png");

    sketchlist(&home)
        .args(["export", "--size", "32", "--server", device.url().as_str()])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 sketch(es)"))
        .stderr(predicate::str::contains("Skipped undecodable sketch 'bad'"));

    assert!(out.join("cat.png").exists());
    assert!(out.join("dog.png").exists());
    assert!(!out.join("bad.png").exists());
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");

    sketchlist(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    sketchlist(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    sketchlist(&home)
        .args(["config", "show", "--server", "http://10.1.2.3", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("url = \"http://10.1.2.3\""))
        .stdout(predicate::str::contains("list_path = \"getList.html\""));
}

#[test]
fn config_path_uses_xdg_dir() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchlist/config.toml"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    sketchlist(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sketchlist"));
}
