//! Read-only view specs: status, log, branches, config.

use crate::prelude::*;

fn committed_project() -> Project {
    let temp = Project::empty();
    temp.file("tracked.txt", "tracked\n");
    let sequence = format!("git init\n{IDENTITY}\ngit add tracked.txt\ngit commit -m \"first commit\"\n");
    temp.gitseq()
        .arg("run")
        .write_stdin(sequence)
        .assert()
        .success();
    temp
}

#[test]
fn status_groups_untracked_files() {
    let temp = committed_project();
    temp.file("new.txt", "new\n");
    temp.gitseq()
        .arg("status")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Untracked Files:")
                .and(predicate::str::contains("new.txt")),
        );
}

#[test]
fn status_on_invalid_repo_fails() {
    let temp = Project::empty();
    temp.gitseq()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid repository"));
}

#[test]
fn log_shows_the_commit_subject() {
    let temp = committed_project();
    temp.gitseq()
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("first commit"));
}

#[test]
fn branches_marks_the_current_branch() {
    let temp = committed_project();
    temp.gitseq()
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("*"));
}

#[test]
fn switch_checks_out_another_branch() {
    let temp = committed_project();
    temp.gitseq()
        .arg("run")
        .write_stdin("git branch feature\n")
        .assert()
        .success();
    temp.gitseq()
        .args(["switch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("switched to feature"));
    temp.gitseq()
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::contains("* feature"));
}

#[test]
fn switch_to_a_missing_branch_fails() {
    let temp = committed_project();
    temp.gitseq()
        .args(["switch", "no-such-branch"])
        .assert()
        .failure();
}

#[test]
fn status_emits_json_when_asked() {
    let temp = committed_project();
    temp.file("new.txt", "new\n");
    temp.gitseq()
        .args(["--format", "json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"untracked\""));
}

#[test]
fn unset_global_config_reads_as_not_set() {
    let temp = Project::empty();
    temp.gitseq()
        .args(["config", "spec.unsetkey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spec.unsetkey is not set"));
}

#[test]
fn global_config_round_trips_without_a_repo() {
    let temp = Project::empty();
    temp.gitseq()
        .args(["config", "user.name", "Spec"])
        .assert()
        .success();
    temp.gitseq()
        .args(["config", "user.name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spec"));
}
