//! End-to-end tests for the spiral-memory binary.

use std::process::{Command, Output};

fn run(args: &[&str], target_env: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spiral-memory"));
    cmd.args(args).env_remove("TARGET").env_remove("RUST_LOG");
    if let Some(target) = target_env {
        cmd.env("TARGET", target);
    }
    cmd.output().expect("failed to run spiral-memory")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_two_answers_from_argument() {
    let output = run(&["265149"], None);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "438\n266330\n");
}

#[test]
fn small_targets() {
    let cases = [("1", "0\n2\n"), ("12", "3\n23\n"), ("23", "2\n25\n"), ("747", "18\n806\n")];
    for (target, expected) in cases {
        let output = run(&[target], None);
        assert!(output.status.success(), "target {}: {}", target, stderr(&output));
        assert_eq!(stdout(&output), expected, "target {}", target);
    }
}

#[test]
fn reads_target_from_environment() {
    let output = run(&[], Some("1024"));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "31\n1968\n");
}

#[test]
fn argument_overrides_environment() {
    let output = run(&["23"], Some("1024"));
    assert_eq!(stdout(&output), "2\n25\n");
}

#[test]
fn missing_target_fails() {
    let output = run(&[], None);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn rejects_non_positive_targets() {
    for bad in ["0", "-5", "abc", "2.5"] {
        let output = run(&[bad], None);
        assert!(!output.status.success(), "{:?} should fail", bad);
        assert!(stdout(&output).is_empty(), "{:?} printed output", bad);
        assert!(
            stderr(&output).contains("positive integer"),
            "{:?} stderr: {}",
            bad,
            stderr(&output)
        );
    }
}

#[test]
fn overflowing_target_fails() {
    let output = run(&["18446744073709551615"], None);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Overflow"), "stderr: {}", stderr(&output));
}
