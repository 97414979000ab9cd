#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cognition_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("cognition"));
    cmd.env("COGNITION_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--test");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Creates alice123 with a Capitals quiz and returns the quiz id.
fn seed_quiz(home: &TempDir) -> String {
    cognition_cmd(home)
        .args(["user", "add", "alice123", "secret12"])
        .assert()
        .success();
    cognition_cmd(home)
        .args(["quiz", "add", "alice123", "Capitals", "European capitals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz created: Capitals"));

    let listing = stdout_of(cognition_cmd(home).args(["quiz", "list", "alice123"]));
    listing
        .split_whitespace()
        .next()
        .expect("quiz id in listing")
        .to_string()
}

#[test]
fn path_points_into_test_document() {
    let home = TempDir::new().unwrap();
    let expected = home
        .path()
        .join("it1901-gr2103")
        .join("cognition")
        .join("cognitionTest.json");

    cognition_cmd(&home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn home_flag_overrides_environment() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();

    cognition_cmd(&home)
        .args(["--home", other.path().to_str().unwrap(), "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(other.path().to_string_lossy().as_ref()));
}

#[test]
fn config_prints_test_mode() {
    let home = TempDir::new().unwrap();
    cognition_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"test\""));
}

#[test]
fn user_add_then_show() {
    let home = TempDir::new().unwrap();

    cognition_cmd(&home)
        .args(["user", "add", "alice123", "secret12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User created: alice123"));

    cognition_cmd(&home)
        .args(["user", "show", "alice123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice123"))
        .stdout(predicate::str::contains("0 quizzes"));

    let document = home
        .path()
        .join("it1901-gr2103")
        .join("cognition")
        .join("cognitionTest.json");
    let raw = fs::read_to_string(document).unwrap();
    assert!(raw.contains("\"username\": \"alice123\""));
    assert!(!home
        .path()
        .join("it1901-gr2103")
        .join("cognition")
        .join("cognition.json")
        .exists());
}

#[test]
fn duplicate_user_fails() {
    let home = TempDir::new().unwrap();
    cognition_cmd(&home)
        .args(["user", "add", "alice123", "secret12"])
        .assert()
        .success();

    cognition_cmd(&home)
        .args(["user", "add", "alice123", "other-pass"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("alice123"));
}

#[test]
fn invalid_username_fails() {
    let home = TempDir::new().unwrap();
    cognition_cmd(&home)
        .args(["user", "add", "al", "secret12"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn quiz_and_card_workflow() {
    let home = TempDir::new().unwrap();
    let quiz_id = seed_quiz(&home);
    assert_eq!(quiz_id.len(), 36);

    cognition_cmd(&home)
        .args(["card", "add", &quiz_id, "Norway", "Oslo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flashcard added to Capitals"));

    cognition_cmd(&home)
        .args(["quiz", "edit", &quiz_id, "--name", "Nordic capitals"])
        .assert()
        .success();

    cognition_cmd(&home)
        .args(["quiz", "show", &quiz_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nordic capitals"))
        .stdout(predicate::str::contains("European capitals"))
        .stdout(predicate::str::contains("Norway"))
        .stdout(predicate::str::contains("Oslo"));

    cognition_cmd(&home)
        .args(["quiz", "rm", &quiz_id])
        .assert()
        .success();

    cognition_cmd(&home)
        .args(["quiz", "list", "alice123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quizzes found."));
}

#[test]
fn removing_unknown_quiz_fails() {
    let home = TempDir::new().unwrap();
    let quiz_id = seed_quiz(&home);

    cognition_cmd(&home)
        .args(["quiz", "rm", &quiz_id])
        .assert()
        .success();

    cognition_cmd(&home)
        .args(["quiz", "rm", &quiz_id])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Quiz not found"));
}

#[test]
fn removing_unknown_card_is_reported() {
    let home = TempDir::new().unwrap();
    let quiz_id = seed_quiz(&home);

    cognition_cmd(&home)
        .args([
            "card",
            "rm",
            &quiz_id,
            "00000000-0000-0000-0000-000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No flashcard"));
}

#[test]
fn deleting_user_removes_their_quizzes() {
    let home = TempDir::new().unwrap();
    let quiz_id = seed_quiz(&home);

    cognition_cmd(&home)
        .args(["user", "rm", "alice123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted: alice123 (1 quizzes)"));

    cognition_cmd(&home)
        .args(["quiz", "show", &quiz_id])
        .assert()
        .failure()
        .code(1);

    cognition_cmd(&home)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    cognition_cmd(&home)
        .args(["-v", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."))
        .stderr(predicate::str::contains("DEBUG"));
}
