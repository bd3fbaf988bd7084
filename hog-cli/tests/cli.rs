use std::process::{Command, Stdio};

use tempfile::TempDir;

fn hog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hog"))
}

#[test]
fn test_missing_path_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let output = hog().arg(&missing).stdin(Stdio::null()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Path does not exist"), "stderr: {stderr}");
    // No dashboard, no report
    assert!(output.stdout.is_empty());
}

#[test]
fn test_non_terminal_stdout_is_rejected() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("file"), "data").unwrap();

    // `output()` pipes stdout, so it is never a terminal here
    let output = hog()
        .arg(temp.path())
        .args(["-n", "3"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not an interactive terminal"),
        "stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_count_is_a_usage_error() {
    let output = hog().args(["-n", "lots"]).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value"));
}
