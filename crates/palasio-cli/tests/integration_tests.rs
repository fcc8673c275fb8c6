//! End-to-end tests for the palasio-setup binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

const FILE_COUNT: usize = 41;

/// A command rooted in `dir`, isolated from the caller's config and env.
fn palasio(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("palasio-setup").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("PALASIO_INSTALL__COMMAND")
        .env_remove("PALASIO_INSTALL__ARGS")
        .env_remove("PALASIO_INSTALL__ENABLED")
        .env_remove("PALASIO_INSTALL__TIMEOUT_SECS");
    cmd
}

/// Write a config file whose installer is `command`, returning its path.
fn installer_config(dir: &Path, command: &str) -> std::path::PathBuf {
    let path = dir.join("palasio.toml");
    fs::write(&path, format!("[install]\ncommand = \"{command}\"\nargs = []\n")).unwrap();
    path
}

fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

// ── Flags ─────────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("palasio-setup [OPTIONS] <project-name>"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn test_version_flags() {
    let temp = TempDir::new().unwrap();
    for flag in ["-v", "--version"] {
        palasio(temp.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_unknown_flag_is_parse_error() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .args(["my-app", "--frobnicate"])
        .assert()
        .code(2);
    assert!(!temp.path().join("my-app").exists());
}

// ── Generation ────────────────────────────────────────────────────────────────

#[test]
fn test_generates_full_monorepo_without_install() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .args(["my-app", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating project: my-app"))
        .stdout(predicate::str::contains("Files created successfully!"))
        .stdout(predicate::str::contains("Run `bun install` when ready."))
        .stdout(predicate::str::contains("cd my-app"));

    let root = temp.path().join("my-app");
    assert_eq!(count_files(&root), FILE_COUNT);
    assert!(root.join("apps/client/app/page.tsx").is_file());
    assert!(root.join("packages/auth/src").is_dir());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-app");
}

#[cfg(unix)]
#[test]
fn test_successful_install_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = installer_config(temp.path(), "true");

    palasio(temp.path())
        .arg("my-app")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing dependencies with `true`"))
        .stdout(predicate::str::contains("Dependencies installed successfully!"));

    assert_eq!(count_files(&temp.path().join("my-app")), FILE_COUNT);
}

#[cfg(unix)]
#[test]
fn test_failed_install_still_succeeds() {
    let temp = TempDir::new().unwrap();
    let config = installer_config(temp.path(), "false");

    palasio(temp.path())
        .arg("my-app")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to install dependencies"))
        .stdout(predicate::str::contains("run `false` manually"));

    assert_eq!(count_files(&temp.path().join("my-app")), FILE_COUNT);
}

#[test]
fn test_missing_installer_program_still_succeeds() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .arg("my-app")
        .env("PALASIO_INSTALL__COMMAND", "palasio-no-such-installer")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to install dependencies"));

    assert_eq!(count_files(&temp.path().join("my-app")), FILE_COUNT);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .args(["my-app", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("apps/api/src/index.ts"));

    assert!(!temp.path().join("my-app").exists());
}

#[test]
fn test_dry_run_json_lists_plan() {
    let temp = TempDir::new().unwrap();
    let out = palasio(temp.path())
        .args(["my-app", "--dry-run", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["dry_run"], true);
    assert_eq!(doc["project"], "my-app");
    assert_eq!(doc["files"].as_array().unwrap().len(), FILE_COUNT);
    assert_eq!(doc["directories"].as_array().unwrap().len(), 12);
}

#[test]
fn test_json_report_carries_install_outcome() {
    let temp = TempDir::new().unwrap();
    let out = palasio(temp.path())
        .args(["my-app", "--skip-install", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["dry_run"], false);
    assert_eq!(doc["install"]["status"], "skipped");
    assert_eq!(doc["version"], env!("CARGO_PKG_VERSION"));
}

#[cfg(unix)]
#[test]
fn test_json_report_survives_chatty_installer() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("palasio.toml");
    fs::write(
        &config,
        "[install]\ncommand = \"echo\"\nargs = [\"resolving packages\"]\n",
    )
    .unwrap();

    let out = palasio(temp.path())
        .args(["my-app", "--output-format", "json"])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["install"]["status"], "installed");
    assert!(String::from_utf8_lossy(&out.stderr).contains("resolving packages"));
}

#[test]
fn test_quiet_prints_nothing() {
    let temp = TempDir::new().unwrap();
    palasio(temp.path())
        .args(["my-app", "--skip-install", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(count_files(&temp.path().join("my-app")), FILE_COUNT);
}

#[test]
fn test_log_file_receives_json_lines() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs/run.log");

    palasio(temp.path())
        .args(["my-app", "--skip-install", "--verbose"])
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    let first = contents.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event["level"].is_string());
}
