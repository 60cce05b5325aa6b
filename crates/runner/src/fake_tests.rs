// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tokio::sync::mpsc;

#[tokio::test]
async fn unstubbed_commands_succeed_with_empty_output() {
    let fake = FakeProcessRunner::new();
    let command = Command::new("git", ["status"], None);
    let result = fake.run(&command, None).await;
    assert!(result.is_success());
    assert_eq!(result.stdout, "");
}

#[tokio::test]
async fn stubs_replay_in_order_per_command() {
    let fake = FakeProcessRunner::new();
    fake.stub_success("git pull", "first");
    fake.stub_failure("git pull", 1, "conflict");
    let command = Command::new("git", ["pull"], None);
    assert_eq!(fake.run(&command, None).await.stdout, "first");
    assert_eq!(fake.run(&command, None).await.exit_code, 1);
    // Exhausted stubs fall back to the default success.
    assert!(fake.run(&command, None).await.is_success());
}

#[tokio::test]
async fn calls_are_recorded_with_cwd() {
    let fake = FakeProcessRunner::new();
    let command = Command::new("git", ["add", "a.rs"], Some("/repo".into()));
    fake.run(&command, None).await;
    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "git");
    assert_eq!(calls[0].cwd, Some("/repo".into()));
    assert_eq!(fake.submissions(), vec!["git add a.rs"]);
}

#[tokio::test]
async fn stubbed_stderr_streams_to_progress() {
    let fake = FakeProcessRunner::new();
    fake.stub("git fetch", CommandResult::new(0, "", "line1\nline2\n"));
    let (tx, mut rx) = mpsc::unbounded_channel();
    fake.run(&Command::new("git", ["fetch"], None), Some(tx)).await;
    assert_eq!(rx.recv().await.as_deref(), Some("line1"));
    assert_eq!(rx.recv().await.as_deref(), Some("line2"));
}

#[test]
fn run_sync_records_too() {
    let fake = FakeProcessRunner::new();
    fake.stub_success("git rev-parse --abbrev-ref HEAD", "main\n");
    let result = fake.run_sync(&Command::new(
        "git",
        ["rev-parse", "--abbrev-ref", "HEAD"],
        None,
    ));
    assert_eq!(result.stdout, "main\n");
    assert_eq!(fake.calls().len(), 1);
}
