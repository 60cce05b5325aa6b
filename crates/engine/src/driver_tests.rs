// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gitseq_core::AbortReason;
use gitseq_runner::FakeProcessRunner;
use tempfile::TempDir;

fn valid_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

fn driver_in(dir: &TempDir) -> (PipelineDriver<FakeProcessRunner>, FakeProcessRunner) {
    let fake = FakeProcessRunner::new();
    let driver = PipelineDriver::new(
        fake.clone(),
        PipelineState::new(),
        RepoContext::new(dir.path()),
    );
    (driver, fake)
}

#[tokio::test]
async fn blank_only_sequence_completes_with_zero_submissions() {
    let dir = tempfile::tempdir().unwrap(); // not even a repo
    let (driver, fake) = driver_in(&dir);
    let outcome = driver.run_sequence("\n   \n\n", None).await.unwrap();
    assert!(outcome.is_success());
    assert!(outcome.results().is_empty());
    assert!(fake.calls().is_empty());
    assert!(!driver.state().is_busy());
}

#[tokio::test]
async fn invalid_repo_is_refused_before_any_submission() {
    let dir = tempfile::tempdir().unwrap();
    let (driver, fake) = driver_in(&dir);
    let err = driver.run_sequence("git status", None).await.unwrap_err();
    assert!(matches!(err, PipelineError::RepoInvalid(_)));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn init_first_sequence_may_start_against_invalid_repo() {
    let dir = tempfile::tempdir().unwrap();
    let (driver, fake) = driver_in(&dir);
    let outcome = driver
        .run_sequence("git init\ngit add .", None)
        .await
        .unwrap();
    assert!(outcome.is_success());
    assert_eq!(fake.submissions(), vec!["git init", "git add ."]);
}

#[tokio::test]
async fn all_commands_run_in_order_on_success() {
    let dir = valid_repo();
    let (driver, fake) = driver_in(&dir);
    let outcome = driver
        .run_sequence("git add .\ngit commit -m msg\ngit push", None)
        .await
        .unwrap();
    assert!(outcome.is_success());
    assert_eq!(outcome.results().len(), 3);
    assert_eq!(
        fake.submissions(),
        vec!["git add .", "git commit -m msg", "git push"]
    );
    assert!(!driver.state().is_busy());
}

#[tokio::test]
async fn failure_stops_later_commands_and_reports_the_ordinal() {
    let dir = valid_repo();
    let (driver, fake) = driver_in(&dir);
    fake.stub_failure("git commit -m msg", 1, "nothing to commit");
    let outcome = driver
        .run_sequence("git add .\ngit commit -m msg\ngit push", None)
        .await
        .unwrap();
    let RunOutcome::Aborted {
        index,
        reason,
        results,
    } = outcome
    else {
        panic!("expected abort");
    };
    assert_eq!(index, 2);
    assert_eq!(results.len(), 2);
    assert!(matches!(reason, AbortReason::CommandFailed { exit_code: 1, .. }));
    // `git push` never ran.
    assert_eq!(fake.calls().len(), 2);
    assert!(!driver.state().is_busy());
}

#[tokio::test]
async fn launch_failure_aborts_with_its_own_reason() {
    let dir = valid_repo();
    let (driver, fake) = driver_in(&dir);
    fake.stub(
        "nosuch --version",
        gitseq_core::CommandResult::launch_failed("nosuch --version", "not found"),
    );
    let outcome = driver
        .run_sequence("nosuch --version\ngit status", None)
        .await
        .unwrap();
    let RunOutcome::Aborted { index: 1, reason, .. } = outcome else {
        panic!("expected abort at the first command");
    };
    assert!(matches!(reason, AbortReason::LaunchFailed { .. }));
    assert_eq!(fake.calls().len(), 1);
}

#[tokio::test]
async fn malformed_line_aborts_without_submitting_it() {
    let dir = valid_repo();
    let (driver, fake) = driver_in(&dir);
    let outcome = driver
        .run_sequence("git status\ngit commit -m \"bad\ngit push", None)
        .await
        .unwrap();
    let RunOutcome::Aborted { index, reason, .. } = outcome else {
        panic!("expected abort");
    };
    assert_eq!(index, 1);
    assert!(matches!(reason, AbortReason::Parse { .. }));
    assert_eq!(fake.submissions(), vec!["git status"]);
}

#[tokio::test]
async fn busy_state_refuses_a_second_run() {
    let dir = valid_repo();
    let (driver, _fake) = driver_in(&dir);
    let _guard = driver.state().try_begin().unwrap();
    let err = driver.run_sequence("git status", None).await.unwrap_err();
    assert_eq!(err, PipelineError::Busy);
}

#[tokio::test]
async fn commands_carry_the_repo_cwd_except_global_config() {
    let dir = valid_repo();
    let (driver, fake) = driver_in(&dir);
    driver
        .run_sequence("git status\ngit config --global user.name Alice", None)
        .await
        .unwrap();
    let calls = fake.calls();
    assert_eq!(calls[0].cwd.as_deref(), Some(dir.path()));
    assert_eq!(calls[1].cwd, None);
}

#[tokio::test]
async fn run_single_respects_busy_and_validity() {
    let dir = tempfile::tempdir().unwrap();
    let (driver, fake) = driver_in(&dir);
    let status = gitseq_core::gitcmd::status(dir.path());
    let result = driver.run_single(status, None).await.unwrap();
    assert_eq!(result.exit_code, gitseq_core::EXIT_REPO_INVALID);
    assert!(fake.calls().is_empty());

    // Global config bypasses the validity check.
    let config = gitseq_core::gitcmd::config_global("user.name", "Alice");
    assert!(driver.run_single(config, None).await.unwrap().is_success());
}

#[tokio::test]
async fn run_and_refresh_reports_no_snapshot_without_a_repo() {
    let dir = tempfile::tempdir().unwrap();
    let (driver, fake) = driver_in(&dir);
    let (outcome, snapshot) = driver.run_and_refresh("\n\n", None).await.unwrap();
    assert!(outcome.is_success());
    assert!(snapshot.is_none());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn run_and_refresh_snapshots_after_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let (driver, fake) = driver_in(&dir);
    // The fake cannot create .git, so do what a real init would.
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let (outcome, snapshot) = driver.run_and_refresh("git init", None).await.unwrap();
    assert_eq!(fake.submissions()[0], "git init");
    assert!(outcome.is_success());
    let snapshot = snapshot.expect("repo is valid after init");
    assert!(snapshot.status.is_empty());
}
