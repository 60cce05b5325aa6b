// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording fake runner for hermetic tests

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::process::{ProcessRunner, Progress};
use async_trait::async_trait;
use gitseq_core::{Command, CommandResult};
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// One submission as the fake saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// In-memory `ProcessRunner` that records every call and replays stubbed
/// results, keyed by the command's display form. Unstubbed commands
/// succeed with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeProcessRunner {
    stubs: Arc<Mutex<HashMap<String, VecDeque<CommandResult>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next run of `command` (display form).
    /// Repeated stubs for the same command replay in order.
    pub fn stub(&self, command: &str, result: CommandResult) {
        self.stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(command.to_string())
            .or_default()
            .push_back(result);
    }

    pub fn stub_success(&self, command: &str, stdout: &str) {
        self.stub(command, CommandResult::success(stdout));
    }

    pub fn stub_failure(&self, command: &str, exit_code: i32, stderr: &str) {
        self.stub(command, CommandResult::new(exit_code, "", stderr));
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The display forms of every call, for quick assertions.
    pub fn submissions(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|call| {
                Command::new(call.program, call.args, call.cwd).to_string()
            })
            .collect()
    }

    fn record_and_reply(&self, command: &Command) -> CommandResult {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                program: command.program.clone(),
                args: command.args.clone(),
                cwd: command.cwd.clone(),
            });
        self.stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(&command.to_string())
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| CommandResult::success(""))
    }
}

#[async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn run(&self, command: &Command, progress: Option<Progress>) -> CommandResult {
        let result = self.record_and_reply(command);
        if let Some(sink) = progress {
            for line in result.stderr.lines() {
                let _ = sink.send(line.to_string());
            }
        }
        result
    }

    fn run_sync(&self, command: &Command) -> CommandResult {
        self.record_and_reply(command)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
