// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot repository operations built on the pipeline driver

use crate::driver::PipelineDriver;
use crate::error::PipelineError;
use crate::repo::RepoContext;
use crate::state::PipelineState;
use gitseq_core::{diff, gitcmd, Command, CommandResult, DiffLine};
use gitseq_runner::ProcessRunner;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("`{command}` failed with code {exit_code}: {stderr}")]
    Tool {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

/// Stage, unstage, discard, and the read-only views. Every mutation goes
/// through the same single-flight policy as a pipeline run.
#[derive(Debug, Clone)]
pub struct Ops<R: ProcessRunner> {
    runner: R,
    state: PipelineState,
    repo: RepoContext,
}

impl<R: ProcessRunner> Ops<R> {
    pub fn new(runner: R, state: PipelineState, repo: RepoContext) -> Self {
        Self { runner, state, repo }
    }

    fn driver(&self) -> PipelineDriver<R> {
        PipelineDriver::new(self.runner.clone(), self.state.clone(), self.repo.clone())
    }

    async fn run_checked(&self, command: Command) -> Result<CommandResult, OpError> {
        let display = command.to_string();
        let result = self.driver().run_single(command, None).await?;
        if result.is_success() {
            Ok(result)
        } else {
            Err(OpError::Tool {
                command: display,
                exit_code: result.exit_code,
                stderr: result.stderr,
            })
        }
    }

    /// Stage the given paths. An empty selection is a successful no-op,
    /// never a `git add` with no paths.
    pub async fn stage(&self, paths: &[String]) -> Result<(), OpError> {
        if paths.is_empty() {
            return Ok(());
        }
        self.run_checked(gitcmd::stage(self.repo.root(), paths))
            .await?;
        Ok(())
    }

    pub async fn unstage(&self, paths: &[String]) -> Result<(), OpError> {
        if paths.is_empty() {
            return Ok(());
        }
        self.run_checked(gitcmd::unstage(self.repo.root(), paths))
            .await?;
        Ok(())
    }

    /// Discard working-tree changes to the given paths. Destructive; the
    /// caller is expected to have confirmed with the user.
    pub async fn discard(&self, paths: &[String]) -> Result<(), OpError> {
        if paths.is_empty() {
            return Ok(());
        }
        self.run_checked(gitcmd::discard(self.repo.root(), paths))
            .await?;
        Ok(())
    }

    pub async fn switch_branch(&self, branch: &str) -> Result<(), OpError> {
        self.run_checked(gitcmd::switch(self.repo.root(), branch))
            .await?;
        Ok(())
    }

    pub async fn init_repo(&self) -> Result<(), OpError> {
        self.run_checked(gitcmd::init(self.repo.root())).await?;
        Ok(())
    }

    /// Classified diff of one file, against the index or the worktree.
    pub async fn diff_file(&self, path: &str, staged: bool) -> Result<Vec<DiffLine>, OpError> {
        let result = self
            .run_checked(gitcmd::diff_file(self.repo.root(), path, staged))
            .await?;
        Ok(diff::render(&result.stdout))
    }

    /// Classified `show --stat` body for one commit.
    pub async fn show_commit(&self, hash: &str) -> Result<Vec<DiffLine>, OpError> {
        let result = self
            .run_checked(gitcmd::show(self.repo.root(), hash))
            .await?;
        Ok(diff::render(&result.stdout))
    }

    pub async fn current_branch(&self) -> Result<String, OpError> {
        let result = self
            .run_checked(gitcmd::current_branch(self.repo.root()))
            .await?;
        Ok(result.stdout.trim().to_string())
    }

    pub async fn set_global_config(&self, key: &str, value: &str) -> Result<(), OpError> {
        self.run_checked(gitcmd::config_global(key, value)).await?;
        Ok(())
    }

    /// Read one global config value without touching the repository or the
    /// busy flag. Unset keys read as `None` (git reports exit code 1).
    pub fn config_value(&self, key: &str) -> Result<Option<String>, OpError> {
        let command = gitcmd::config_get_global(key);
        let display = command.to_string();
        let result = self.runner.run_sync(&command);
        match result.exit_code {
            0 => Ok(Some(result.stdout.trim().to_string())),
            1 => Ok(None),
            code => Err(OpError::Tool {
                command: display,
                exit_code: code,
                stderr: result.stderr,
            }),
        }
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
