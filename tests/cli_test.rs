//! Integration tests for the launcher binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SENTINEL: &str = "{0C4BCE33-258D-4189-AE0D-B217820B7C2C}";

/// A launcher command isolated from the real Steam installation.
fn launcher(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("empires-launcher"));
    cmd.current_dir(cwd)
        .env("HOME", home)
        .env_remove("EMPIRES_LAUNCHER_PROMPT_INSTALL")
        .env_remove("RUST_LOG");
    cmd
}

/// `<root>/steamapps/common/Empires`, two levels below the search root.
fn mod_install(root: &Path) -> PathBuf {
    let dir = root.join("steamapps").join("common").join("Empires");
    fs::create_dir_all(dir.join("empires")).unwrap();
    dir
}

#[cfg(unix)]
fn fake_engine(dir: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).unwrap();
    let exe = dir.join("hl2.exe");
    fs::write(&exe, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn missing_engine_base_declines_install_headless() {
    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());

    launcher(&cwd, temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Source SDK Base 2007 was not found"))
        .stdout(predicate::str::contains("[no]"));
}

#[cfg(unix)]
#[test]
fn sentinel_ends_launcher() {
    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());
    fake_engine(
        &temp.path().join("steamapps").join("common").join("Source SDK Base 2007"),
        &format!("echo starting\necho '{}'", SENTINEL),
    );

    launcher(&cwd, temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Empires has loaded"));
}

#[cfg(unix)]
#[test]
fn game_outlives_launcher() {
    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());
    let engine = temp.path().join("steamapps").join("common").join("Source SDK Base 2007");
    fake_engine(
        &engine,
        &format!(
            "echo '{}'\nsleep 1\necho map loaded\necho client connected\ntouch \"$(dirname \"$0\")/alive\"",
            SENTINEL
        ),
    );

    launcher(&cwd, temp.path()).assert().success();

    let alive = engine.join("alive");
    for _ in 0..100 {
        if alive.exists() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    assert!(alive.exists());
}

#[cfg(unix)]
#[test]
fn child_exit_ends_launcher() {
    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());
    fake_engine(
        &temp.path().join("steamapps").join("common").join("source sdk base 2007"),
        "echo starting\nexit 1",
    );

    launcher(&cwd, temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Empires exited"));
}

#[cfg(unix)]
#[test]
fn arguments_are_forwarded_to_game() {
    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());
    let engine = temp.path().join("steamapps").join("common").join("Source SDK Base 2007");
    fake_engine(
        &engine,
        "printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"",
    );

    launcher(&cwd, temp.path())
        .args(["-nosound", "+map", "emp_canyon"])
        .assert()
        .success();

    let args = fs::read_to_string(engine.join("args.txt")).unwrap();
    let mod_dir = cwd.join("empires");
    assert_eq!(
        args.lines().collect::<Vec<_>>(),
        vec!["-game", mod_dir.to_str().unwrap(), "-nosound", "+map", "emp_canyon"]
    );
}

#[cfg(unix)]
#[test]
fn falls_back_to_steam_root_in_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let cwd = mod_install(&temp.path().join("elsewhere"));
    fake_engine(
        &home
            .join(".steam")
            .join("steam")
            .join("steamapps")
            .join("common")
            .join("Source SDK Base 2007"),
        &format!("echo '{}'", SENTINEL),
    );

    launcher(&cwd, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Empires has loaded"));
}

#[cfg(unix)]
#[test]
fn unstartable_engine_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let cwd = mod_install(temp.path());
    let engine = temp.path().join("steamapps").join("common").join("Source SDK Base 2007");
    fs::create_dir_all(&engine).unwrap();
    let exe = engine.join("hl2.exe");
    fs::write(&exe, "not a program").unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o644)).unwrap();

    launcher(&cwd, temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("problem running the game"));
}
