// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure pipeline state machine: ordered command lines, one in flight,
//! abort on first failure
//!
//! `PipelineRun` holds no I/O. A driver calls `start`, executes each
//! `Step::Submit` it hands back, and feeds the result into `record` until a
//! terminal step appears. Exactly one terminal step is produced per run.

use crate::command::{Command, CommandParseError};
use crate::result::{CommandResult, EXIT_KILLED, EXIT_LAUNCH_FAILED};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a run stopped before reaching the end of its line list.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum AbortReason {
    #[error("cannot parse `{line}`: {message}")]
    Parse { line: String, message: String },
    #[error("{stderr}")]
    LaunchFailed { command: String, stderr: String },
    #[error("`{command}` was killed")]
    Killed { command: String },
    #[error("`{command}` exited with code {exit_code}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

/// Observable run state. `index` is the 1-based ordinal of the submission
/// within this run, counting only lines that actually produced a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunState {
    Idle,
    Running { index: usize },
    Done,
    Aborted { index: usize, reason: AbortReason },
}

/// What the driver should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Execute this command, then call `record` with its result.
    Submit { index: usize, command: Command },
    /// All lines ran successfully. Terminal.
    Done,
    /// The run stopped at submission `index`. Terminal.
    Aborted { index: usize, reason: AbortReason },
}

/// One sequential run over a list of command lines.
///
/// Lines are tokenized exactly once, at submission time. Lines that
/// tokenize to nothing are skipped; a line with unbalanced quoting aborts
/// the run without submitting anything.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    lines: Vec<String>,
    cwd: Option<PathBuf>,
    cursor: usize,
    current: Option<String>,
    state: RunState,
}

impl PipelineRun {
    /// Build a run from raw text lines. Blank and whitespace-only lines are
    /// dropped up front so an all-blank input is an empty (trivially
    /// successful) run.
    pub fn new<I, S>(lines: I, cwd: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .filter(|l| !l.trim().is_empty())
            .collect();
        Self {
            lines,
            cwd,
            cursor: 0,
            current: None,
            state: RunState::Idle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The first non-blank line, before tokenization. Used for the
    /// repository-bootstrap special case.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Begin the run: either the first submission or an immediate terminal
    /// step for empty or unparseable input.
    pub fn start(&mut self) -> Step {
        self.next_submission()
    }

    /// Record the result of the in-flight submission and advance.
    ///
    /// Success moves on to the next line; failure aborts the run. Calling
    /// this without an in-flight submission returns the current terminal
    /// step unchanged.
    pub fn record(&mut self, result: &CommandResult) -> Step {
        let RunState::Running { index } = self.state else {
            return self.terminal_step();
        };
        let command = self.current.take().unwrap_or_default();
        if result.is_success() {
            return self.next_submission();
        }
        let reason = match result.exit_code {
            EXIT_LAUNCH_FAILED => AbortReason::LaunchFailed {
                command,
                stderr: result.stderr.clone(),
            },
            EXIT_KILLED => AbortReason::Killed { command },
            code => AbortReason::CommandFailed {
                command,
                exit_code: code,
                stderr: result.stderr.clone(),
            },
        };
        self.state = RunState::Aborted {
            index,
            reason: reason.clone(),
        };
        Step::Aborted { index, reason }
    }

    fn next_submission(&mut self) -> Step {
        while self.cursor < self.lines.len() {
            let line = self.lines[self.cursor].clone();
            self.cursor += 1;
            match Command::parse(&line, self.cwd.clone()) {
                Ok(command) => {
                    let index = match self.state {
                        RunState::Running { index } => index + 1,
                        _ => 1,
                    };
                    self.current = Some(command.to_string());
                    self.state = RunState::Running { index };
                    return Step::Submit { index, command };
                }
                // Tokenized to nothing; not a submission.
                Err(CommandParseError::Empty) => continue,
                Err(err @ CommandParseError::Malformed(_)) => {
                    let index = match self.state {
                        RunState::Running { index } => index,
                        _ => 0,
                    };
                    let reason = AbortReason::Parse {
                        line,
                        message: err.to_string(),
                    };
                    self.state = RunState::Aborted {
                        index,
                        reason: reason.clone(),
                    };
                    return Step::Aborted { index, reason };
                }
            }
        }
        self.state = RunState::Done;
        Step::Done
    }

    fn terminal_step(&self) -> Step {
        match &self.state {
            RunState::Aborted { index, reason } => Step::Aborted {
                index: *index,
                reason: reason.clone(),
            },
            _ => Step::Done,
        }
    }
}

/// Summary of a completed run, with the per-submission results in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    Completed {
        results: Vec<CommandResult>,
    },
    Aborted {
        index: usize,
        reason: AbortReason,
        results: Vec<CommandResult>,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    pub fn results(&self) -> &[CommandResult] {
        match self {
            RunOutcome::Completed { results } => results,
            RunOutcome::Aborted { results, .. } => results,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
