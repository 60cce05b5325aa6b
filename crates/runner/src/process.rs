// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real process execution with live progress streaming

use async_trait::async_trait;
use gitseq_core::{Command, CommandResult, EXIT_KILLED};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Sink for progress lines. git writes its human-facing progress to
/// stderr, so each stderr line is forwarded as it arrives; stdout is
/// buffered whole for parsing.
pub type Progress = UnboundedSender<String>;

/// The seam between the engine and external processes.
///
/// `run` never fails: every outcome, including a process that could not be
/// started, is expressed as a `CommandResult` so callers handle exactly one
/// completion per submission.
#[async_trait]
pub trait ProcessRunner: Clone + Send + Sync + 'static {
    async fn run(&self, command: &Command, progress: Option<Progress>) -> CommandResult;

    /// Blocking variant for short metadata reads outside the async engine.
    fn run_sync(&self, command: &Command) -> CommandResult;
}

/// Execution policy for the real runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Kill a command that runs longer than this. `None` means commands
    /// may run indefinitely (interactive-credential prompts excepted by
    /// the null stdin below).
    pub timeout: Option<Duration>,
}

/// Spawns real processes. One command at a time per call; the caller is
/// responsible for serializing submissions.
#[derive(Debug, Clone, Default)]
pub struct GitProcessRunner {
    config: RunnerConfig,
}

impl GitProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            config: RunnerConfig {
                timeout: Some(timeout),
            },
        }
    }

    async fn run_inner(&self, command: &Command, progress: Option<Progress>) -> CommandResult {
        let display = command.to_string();
        let mut cmd = tokio::process::Command::new(&command.program);
        cmd.args(&command.args)
            // Null stdin: a command that prompts fails instead of hanging.
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => return CommandResult::launch_failed(&display, &err.to_string()),
        };

        let stdout_pipe = child.stdout.take();
        let stdout_task = tokio::spawn(async move {
            let mut buf = String::new();
            if let Some(mut pipe) = stdout_pipe {
                let _ = pipe.read_to_string(&mut buf).await;
            }
            buf
        });

        let stderr_pipe = child.stderr.take();
        let stderr_task = tokio::spawn(async move {
            let mut collected = String::new();
            if let Some(pipe) = stderr_pipe {
                let mut lines = BufReader::new(pipe).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if let Some(sink) = &progress {
                        // A closed sink just means nobody is watching.
                        let _ = sink.send(line.clone());
                    }
                    collected.push_str(&line);
                    collected.push('\n');
                }
            }
            collected
        });

        let waited = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited,
                Err(_) => {
                    let _ = child.kill().await;
                    let _ = stdout_task.await;
                    let _ = stderr_task.await;
                    return CommandResult::killed(&display, limit);
                }
            },
            None => child.wait().await,
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();
        match waited {
            Ok(status) => {
                // No code means the process died to a signal.
                CommandResult::new(status.code().unwrap_or(EXIT_KILLED), stdout, stderr)
            }
            Err(err) => CommandResult::new(
                EXIT_KILLED,
                stdout,
                format!("{stderr}wait failed for `{display}`: {err}"),
            ),
        }
    }
}

#[async_trait]
impl ProcessRunner for GitProcessRunner {
    async fn run(&self, command: &Command, progress: Option<Progress>) -> CommandResult {
        let rendered = command.to_string();
        debug!(command = %rendered, "submitting");
        let started = Instant::now();
        let result = self.run_inner(command, progress).await;
        let elapsed_ms = started.elapsed().as_millis();
        if result.is_success() {
            info!(command = %rendered, elapsed_ms, "command completed");
        } else {
            warn!(
                command = %rendered,
                exit_code = result.exit_code,
                elapsed_ms,
                "command failed"
            );
        }
        result
    }

    fn run_sync(&self, command: &Command) -> CommandResult {
        let display = command.to_string();
        let mut cmd = std::process::Command::new(&command.program);
        cmd.args(&command.args).stdin(Stdio::null());
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }
        match cmd.output() {
            Ok(output) => CommandResult::new(
                output.status.code().unwrap_or(EXIT_KILLED),
                String::from_utf8_lossy(&output.stdout).into_owned(),
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ),
            Err(err) => CommandResult::launch_failed(&display, &err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
