//! Pipeline execution specs
//!
//! Sequences run in order, stop at the first failure, and report where
//! they stopped.

use crate::prelude::*;

#[test]
fn blank_sequence_succeeds_without_a_repo() {
    let temp = Project::empty();
    temp.gitseq()
        .arg("run")
        .write_stdin("\n   \n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 0 command(s)"));
}

#[test]
fn sequence_against_invalid_repo_is_refused() {
    let temp = Project::empty();
    temp.gitseq()
        .arg("run")
        .write_stdin("git status\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid repository"));
}

#[test]
fn unbalanced_quoting_aborts_before_running_anything() {
    let temp = Project::empty();
    temp.fake_git_dir();
    temp.gitseq()
        .arg("run")
        .write_stdin("git commit -m \"unterminated\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("aborted at command"));
}

#[test]
fn init_led_sequence_bootstraps_a_repository() {
    let temp = Project::empty();
    temp.file("hello.txt", "hello\n");
    let sequence = format!("git init\n{IDENTITY}\ngit add hello.txt\ngit commit -m first\n");
    temp.gitseq()
        .arg("run")
        .write_stdin(sequence)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 5 command(s)"));
    assert!(temp.path().join(".git").is_dir());
}

#[test]
fn failing_command_reports_its_position() {
    let temp = Project::empty();
    let sequence = format!("git init\n{IDENTITY}\ngit commit -m nothing\n");
    temp.gitseq()
        .arg("run")
        .write_stdin(sequence)
        .assert()
        .failure()
        .stderr(predicate::str::contains("aborted at command 4"));
}

#[test]
fn init_subcommand_bootstraps_a_repository() {
    let temp = Project::empty();
    temp.gitseq()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized repository"));
    assert!(temp.path().join(".git").is_dir());
}

#[test]
fn sequence_can_come_from_a_file() {
    let temp = Project::empty();
    temp.file("sequence.txt", "git init\n");
    temp.gitseq()
        .arg("run")
        .arg(temp.path().join("sequence.txt"))
        .assert()
        .success();
    assert!(temp.path().join(".git").is_dir());
}
