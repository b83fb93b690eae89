use std::fs;
use std::process::Command;

use tempfile::TempDir;

const VALID_CONFIG: &str = r##"
icon_size = 64
spacing = 8
margin = 8
corner_radius = 12.0
bevel_color = "#CCB38099"
background_color = [0.1, 0.1, 0.1, 0.85]
apps = []
"##;

fn shaderdock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shaderdock"))
}

#[test]
fn check_accepts_a_valid_config() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("shader-dock.toml"), VALID_CONFIG).unwrap();

    let output = shaderdock()
        .env("SHADERDOCK_CONFIG_DIR", config_dir.path())
        .args(["check", "--output", "1920x1080"])
        .output()
        .expect("failed to run shaderdock check");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Empty app list lays out as a single slot: 64 + 2*8 square.
    assert!(stdout.contains("80x80"), "stdout was: {stdout}");
}

#[test]
fn check_uses_defaults_when_config_is_missing() {
    let config_dir = TempDir::new().unwrap();

    let status = shaderdock()
        .env("SHADERDOCK_CONFIG_DIR", config_dir.path())
        .arg("check")
        .status()
        .expect("failed to run shaderdock check");

    assert!(status.success());
}

#[test]
fn check_rejects_invalid_config() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("shader-dock.toml"),
        "icon_size = \"huge\"",
    )
    .unwrap();

    let status = shaderdock()
        .env("SHADERDOCK_CONFIG_DIR", config_dir.path())
        .arg("check")
        .status()
        .expect("failed to run shaderdock check");

    assert!(!status.success());
}

#[test]
fn check_honors_explicit_config_flag() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("elsewhere.toml");
    fs::write(&config_path, "apps = [\"ghost-app-that-does-not-exist\"]").unwrap();

    let output = shaderdock()
        .env("SHADERDOCK_CONFIG_DIR", dir.path())
        .args(["check", "--config"])
        .arg(&config_path)
        .output()
        .expect("failed to run shaderdock check");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no-entry"), "stdout was: {stdout}");
    assert!(stdout.contains("0 of 1 configured"), "stdout was: {stdout}");
}

#[test]
fn launch_of_unknown_app_fails() {
    let status = shaderdock()
        .args(["launch", "shaderdock-test-ghost-entry"])
        .status()
        .expect("failed to run shaderdock launch");

    assert!(!status.success());
}

#[test]
fn where_reports_the_override_directory() {
    let config_dir = TempDir::new().unwrap();

    let output = shaderdock()
        .env("SHADERDOCK_CONFIG_DIR", config_dir.path())
        .arg("where")
        .output()
        .expect("failed to run shaderdock where");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shader-dock.toml"), "stdout was: {stdout}");
}
