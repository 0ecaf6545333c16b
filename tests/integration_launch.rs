// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the full launch path.
//!
//! Spawns the real binary and inspects the child's view of the
//! environment through /bin/sh.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn loadenv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loadenv"))
}

/// Write an env file into the temp directory and return its path.
fn write_env_file(dir: &Path, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join("test.env");
    fs::write(&path, contents).expect("failed to write env file");
    path
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Environment manipulation
// =============================================================================

#[test]
fn launch_sets_variables() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"LOADENV_T_FOO=bar\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "$LOADENV_T_FOO""#])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "bar");
    assert_eq!(stderr_of(&output), "", "a successful launch is silent");
}

#[test]
fn launch_unsets_variable() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"LOADENV_T_DROP=\n");

    let output = loadenv()
        .env("LOADENV_T_DROP", "inherited")
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "${LOADENV_T_DROP+set}""#])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "", "empty value must unset, not empty");
}

#[test]
fn launch_parent_environment_passes_through() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"LOADENV_T_OTHER=1\n");

    let output = loadenv()
        .env("LOADENV_T_KEEP", "yes")
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "$LOADENV_T_KEEP""#])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "yes");
}

#[test]
fn launch_value_keeps_later_equals_signs() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"LOADENV_T_URL=key=value&other=2\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "$LOADENV_T_URL""#])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(stdout_of(&output), "key=value&other=2");
}

#[test]
fn launch_comment_lines_are_ignored() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"#LOADENV_T_GHOST=9\n\nnot a directive\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "${LOADENV_T_GHOST-unset}""#])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "unset");
}

// =============================================================================
// Missing env file
// =============================================================================

#[test]
fn launch_missing_env_file_still_runs() {
    let temp = temp_dir();
    let env_file = temp.path().join("no-such-file.env");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", "echo ok"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "ok\n");
}

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn launch_usage_error_exits_1() {
    let output = loadenv().output().expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Usage"));
}

#[test]
fn launch_missing_command_exits_1() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .arg(&env_file)
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn launch_unreadable_env_file_exits_2() {
    // A directory opens fine but fails on the first read.
    let temp = temp_dir();

    let output = loadenv()
        .arg(temp.path())
        .args(["/bin/sh", "-c", "echo should-not-run"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("env file"));
    assert_eq!(stdout_of(&output), "", "the command must not run");
}

#[test]
fn launch_bad_directive_exits_3() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"=orphan\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", "echo should-not-run"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_of(&output).contains("empty variable name"));
}

#[test]
fn launch_unknown_command_exits_4() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .arg(&env_file)
        .arg("loadenv-no-such-program-xyz")
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr_of(&output).contains("executable not found"));
}

#[test]
fn launch_bad_config_file_exits_5() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .args(["--config", "/nonexistent/loadenv.toml"])
        .arg(&env_file)
        .args(["/bin/sh", "-c", "echo should-not-run"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr_of(&output).contains("Failed to load config"));
}

#[test]
fn launch_child_exit_status_is_our_exit_status() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", "exit 7"])
        .output()
        .expect("failed to run loadenv");

    // exec replaced us, so the child's status is the process status.
    assert_eq!(output.status.code(), Some(7));
}

// =============================================================================
// Argument passing
// =============================================================================

#[test]
fn launch_arguments_arrive_in_order() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["echo", "one", "two", "three"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "one two three\n");
}

#[test]
fn launch_own_flag_names_reach_the_child() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "$1""#, "sh", "--strict-lines"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "--strict-lines");
}

#[test]
fn launch_relative_path_command() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"A=1\n");

    let script = temp.path().join("run.sh");
    fs::write(&script, "#!/bin/sh\necho from-script\n").expect("failed to write script");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .expect("failed to chmod script");

    let output = loadenv()
        .current_dir(temp.path())
        .arg(&env_file)
        .arg("./run.sh")
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "from-script\n");
}

// =============================================================================
// Executable lookup
// =============================================================================

#[test]
fn launch_env_file_path_governs_lookup() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).expect("failed to create bin dir");

    // The tool exists only in the directory the env file puts on PATH.
    let tool = bin_dir.join("lookup-tool");
    fs::write(&tool, "#!/bin/sh\necho from-env-file-path\n").expect("failed to write tool");
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).expect("failed to chmod tool");

    let env_file = write_env_file(
        temp.path(),
        format!("PATH={}\n", bin_dir.display()).as_bytes(),
    );

    let output = loadenv()
        .arg(&env_file)
        .arg("lookup-tool")
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "from-env-file-path\n");
}

#[test]
fn launch_env_file_path_wins_over_parent() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let parent_bin = temp.path().join("parent-bin");
    let file_bin = temp.path().join("file-bin");
    fs::create_dir(&parent_bin).expect("failed to create parent-bin");
    fs::create_dir(&file_bin).expect("failed to create file-bin");

    // Same name in both directories, different output.
    for (dir, marker) in [(&parent_bin, "from-parent-path"), (&file_bin, "from-env-file-path")] {
        let tool = dir.join("lookup-tool");
        fs::write(&tool, format!("#!/bin/sh\necho {marker}\n")).expect("failed to write tool");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod tool");
    }

    let env_file = write_env_file(
        temp.path(),
        format!("PATH={}\n", file_bin.display()).as_bytes(),
    );

    let output = loadenv()
        .env("PATH", &parent_bin)
        .arg(&env_file)
        .arg("lookup-tool")
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "from-env-file-path\n",
        "the env file's PATH decides which copy runs"
    );
}

// =============================================================================
// Line modes
// =============================================================================

#[test]
fn launch_strict_lines_flag_rejects_long_line() {
    let temp = temp_dir();
    let long_line = format!("BIG={}\n", "x".repeat(5000));
    let env_file = write_env_file(temp.path(), long_line.as_bytes());

    let output = loadenv()
        .arg("--strict-lines")
        .arg(&env_file)
        .args(["/bin/sh", "-c", "echo should-not-run"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("exceeds"));
}

#[test]
fn launch_split_mode_truncates_long_line() {
    let temp = temp_dir();
    let long_line = format!("BIG={}\n", "x".repeat(5000));
    let env_file = write_env_file(temp.path(), long_line.as_bytes());

    let output = loadenv()
        .arg(&env_file)
        .args(["/bin/sh", "-c", r#"printf "%s" "${#BIG}""#])
        .output()
        .expect("failed to run loadenv");

    // Default split mode: the first 4095-byte chunk carries "BIG=" plus
    // 4091 bytes of value, the tail is skipped.
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "4091");
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn launch_log_file_survives_exec() {
    let temp = temp_dir();
    let env_file = write_env_file(temp.path(), b"LOADENV_T_LOG=1\n");
    let log_file = temp.path().join("launch.log");

    let output = loadenv()
        .arg("--log-file")
        .arg(&log_file)
        .arg(&env_file)
        .args(["/bin/sh", "-c", "exit 0"])
        .output()
        .expect("failed to run loadenv");

    assert_eq!(output.status.code(), Some(0));

    // The file layer is flushed before exec; nothing runs after it.
    let log = fs::read_to_string(&log_file).expect("log file should exist");
    assert!(log.contains("env file applied"), "log: {log}");
}
