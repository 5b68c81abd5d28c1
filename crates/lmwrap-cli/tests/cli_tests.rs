//! Tests for the `lmwrap` binary against a fake Lunar Magic.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fake_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("lunar-magic");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn lmwrap(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lmwrap"))
        .args(args)
        .current_dir(dir)
        .env_remove("LUNAR_MAGIC_PATH")
        .env_remove("LMWRAP_CAPTURE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn success_forwards_tool_output() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), r#"echo "args: $*""#);

    let output = lmwrap(
        dir.path(),
        &["--tool", tool.to_str().unwrap(), "export-level", "rom.smc", "level.mwl", "105"],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "args: -ExportLevel rom.smc level.mwl 105\n"
    );
}

#[test]
fn tool_exit_code_passes_through() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), "echo 'cannot open ROM' >&2\nexit 3");

    let output = lmwrap(
        dir.path(),
        &["--tool", tool.to_str().unwrap(), "expand-rom", "rom.smc", "4MB"],
    );

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open ROM"));
    assert!(stderr.contains("Failed to expand 'rom.smc' to 4MB using"));
}

#[test]
fn json_output_describes_the_outcome() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), "echo first\necho second");

    let output = lmwrap(
        dir.path(),
        &["--json", "--tool", tool.to_str().unwrap(), "import-all-graphics", "rom.smc"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["exit_code"], 0);
    assert_eq!(value["succeeded"], true);
    assert_eq!(value["out"], serde_json::json!(["first", "second"]));
    assert!(value["error_code"].is_null());
}

#[test]
fn tool_from_environment() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), "echo ok");

    let output = Command::new(env!("CARGO_BIN_EXE_lmwrap"))
        .args(["transfer-credits", "src.smc", "dst.smc"])
        .current_dir(dir.path())
        .env("LUNAR_MAGIC_PATH", &tool)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\n");
}

#[test]
fn missing_tool_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.exe");

    let output = lmwrap(
        dir.path(),
        &["--tool", missing.to_str().unwrap(), "export-gfx", "rom.smc"],
    );

    assert_eq!(output.status.code(), Some(78));
}

#[test]
fn unconfigured_tool_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = lmwrap(dir.path(), &["export-gfx", "rom.smc"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("LUNAR_MAGIC_PATH"));
}

#[test]
fn empty_tool_environment_counts_as_unset() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_lmwrap"))
        .args(["export-gfx", "rom.smc"])
        .current_dir(dir.path())
        .env("LUNAR_MAGIC_PATH", "")
        .env_remove("LMWRAP_CAPTURE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Lunar Magic location not configured"));
}

#[test]
fn capture_dir_from_environment() {
    let dir = TempDir::new().unwrap();
    let captures = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), "echo kept");

    let output = Command::new(env!("CARGO_BIN_EXE_lmwrap"))
        .args(["--keep-captures", "--tool", tool.to_str().unwrap(), "export-gfx", "rom.smc"])
        .current_dir(dir.path())
        .env("LMWRAP_CAPTURE_DIR", captures.path())
        .env_remove("LUNAR_MAGIC_PATH")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_dir(captures.path()).unwrap().count(), 2);
}

#[test]
fn empty_capture_dir_environment_counts_as_unset() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), "echo ok");

    let output = Command::new(env!("CARGO_BIN_EXE_lmwrap"))
        .args(["--tool", tool.to_str().unwrap(), "export-gfx", "rom.smc"])
        .current_dir(dir.path())
        .env("LMWRAP_CAPTURE_DIR", "")
        .env_remove("LUNAR_MAGIC_PATH")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\n");
}

#[test]
fn garbage_size_is_rejected_by_the_parser() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("spawned");
    let tool = fake_tool(dir.path(), &format!("touch '{}'", marker.display()));

    let output = lmwrap(
        dir.path(),
        &["--tool", tool.to_str().unwrap(), "expand-rom", "rom.smc", "garbage"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(!marker.exists());
}
