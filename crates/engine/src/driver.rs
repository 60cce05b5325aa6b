// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a pipeline run over the process seam

use crate::error::PipelineError;
use crate::refresh::{RefreshService, RepoSnapshot};
use crate::repo::RepoContext;
use crate::state::PipelineState;
use gitseq_core::{is_init_line, Command, CommandResult, PipelineRun, RunOutcome, Step};
use gitseq_runner::{ProcessRunner, Progress};
use tracing::{debug, info, info_span, warn, Instrument};

/// Executes pipeline runs one at a time.
///
/// The driver is cheap to clone; clones share the same busy state, so two
/// clones can never run concurrently.
#[derive(Debug, Clone)]
pub struct PipelineDriver<R: ProcessRunner> {
    runner: R,
    state: PipelineState,
    repo: RepoContext,
}

impl<R: ProcessRunner> PipelineDriver<R> {
    pub fn new(runner: R, state: PipelineState, repo: RepoContext) -> Self {
        Self { runner, state, repo }
    }

    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Run a newline-separated sequence of command lines.
    pub async fn run_sequence(
        &self,
        text: &str,
        progress: Option<Progress>,
    ) -> Result<RunOutcome, PipelineError> {
        self.run_lines(text.lines(), progress).await
    }

    /// Run an ordered list of command lines, aborting at the first failure.
    ///
    /// An empty (or all-blank) list completes trivially without touching
    /// the busy flag. A sequence whose first line is `git init` may start
    /// against an invalid repository; anything else is refused up front.
    pub async fn run_lines<I, S>(
        &self,
        lines: I,
        progress: Option<Progress>,
    ) -> Result<RunOutcome, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut run = PipelineRun::new(lines, Some(self.repo.root().to_path_buf()));
        if run.is_empty() {
            return Ok(RunOutcome::Completed {
                results: Vec::new(),
            });
        }

        let bootstrap = run.first_line().is_some_and(is_init_line);
        if !bootstrap && !self.repo.is_valid() {
            return Err(PipelineError::RepoInvalid(
                self.repo.root().display().to_string(),
            ));
        }

        let _guard = self.state.try_begin()?;
        let span = info_span!("pipeline", lines = run.len());
        self.drive(&mut run, progress).instrument(span).await
    }

    async fn drive(
        &self,
        run: &mut PipelineRun,
        progress: Option<Progress>,
    ) -> Result<RunOutcome, PipelineError> {
        let mut results = Vec::new();
        let mut step = run.start();
        loop {
            match step {
                Step::Submit { index, command } => {
                    let command = place(command);
                    debug!(index, command = %command, "submitting");
                    let result = self.runner.run(&command, progress.clone()).await;
                    if command.is_init() && result.is_success() {
                        // The repository may just have become valid.
                        info!(valid = self.repo.is_valid(), "repository initialized");
                    }
                    step = run.record(&result);
                    results.push(result);
                }
                Step::Done => {
                    info!(commands = results.len(), "pipeline completed");
                    return Ok(RunOutcome::Completed { results });
                }
                Step::Aborted { index, reason } => {
                    warn!(index, %reason, "pipeline aborted");
                    return Ok(RunOutcome::Aborted {
                        index,
                        reason,
                        results,
                    });
                }
            }
        }
    }

    /// Run one already-typed command under the same single-flight policy.
    /// Init and global-config commands bypass the validity check; for
    /// anything else an invalid repository yields the repo-invalid
    /// sentinel result, keeping the one-result-per-submission contract.
    pub async fn run_single(
        &self,
        command: Command,
        progress: Option<Progress>,
    ) -> Result<CommandResult, PipelineError> {
        let bypass = command.is_init() || command.is_global_config();
        if !bypass && !self.repo.is_valid() {
            return Ok(CommandResult::repo_invalid(self.repo.root()));
        }
        let _guard = self.state.try_begin()?;
        let command = place(command);
        Ok(self.runner.run(&command, progress).await)
    }

    /// Run a sequence, then take a fresh snapshot of the repository views.
    /// A refused snapshot (repository still invalid, or another run claimed
    /// the flag in between) is logged and reported as `None`.
    pub async fn run_and_refresh(
        &self,
        text: &str,
        progress: Option<Progress>,
    ) -> Result<(RunOutcome, Option<RepoSnapshot>), PipelineError> {
        let outcome = self.run_sequence(text, progress).await?;
        let refresh =
            RefreshService::new(self.runner.clone(), self.state.clone(), self.repo.clone());
        let snapshot = match refresh.snapshot().await {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(%err, "post-run refresh skipped");
                None
            }
        };
        Ok((outcome, snapshot))
    }
}

// Global config deliberately runs outside any repository.
fn place(mut command: Command) -> Command {
    if command.is_global_config() {
        command.cwd = None;
    }
    command
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
