// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository snapshots: status, branches, and history in one pass

use crate::error::PipelineError;
use crate::repo::RepoContext;
use crate::state::PipelineState;
use gitseq_core::{gitcmd, HistoryModel, StatusModel};
use gitseq_runner::ProcessRunner;
use serde::Serialize;
use tracing::warn;

// How much history one snapshot loads.
const LOG_COUNT: usize = 200;

/// A section of the snapshot that could not be refreshed. The other
/// sections are still usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshError {
    pub section: &'static str,
    pub exit_code: i32,
    pub stderr: String,
}

/// One local or remote branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
    pub is_remote: bool,
}

/// Everything the views need, captured in one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    pub status: StatusModel,
    pub branches: Vec<Branch>,
    pub history: HistoryModel,
    /// Sections that failed; their models above are left empty.
    pub errors: Vec<RefreshError>,
}

/// Reads repository metadata through the same process seam the pipelines
/// use, and under the same single-flight policy.
#[derive(Debug, Clone)]
pub struct RefreshService<R: ProcessRunner> {
    runner: R,
    state: PipelineState,
    repo: RepoContext,
}

impl<R: ProcessRunner> RefreshService<R> {
    pub fn new(runner: R, state: PipelineState, repo: RepoContext) -> Self {
        Self { runner, state, repo }
    }

    /// Capture a fresh snapshot. Refused while a pipeline is running or
    /// when no valid repository is open; a single failing section degrades
    /// to an empty model plus an error entry instead of failing the whole
    /// snapshot.
    pub async fn snapshot(&self) -> Result<RepoSnapshot, PipelineError> {
        if !self.repo.is_valid() {
            return Err(PipelineError::RepoInvalid(
                self.repo.root().display().to_string(),
            ));
        }
        let _guard = self.state.try_begin()?;
        let root = self.repo.root();
        let mut snapshot = RepoSnapshot::default();

        let result = self.runner.run(&gitcmd::status(root), None).await;
        if result.is_success() {
            snapshot.status.populate(&result.stdout);
        } else {
            snapshot.errors.push(section_error("status", &result));
        }

        let result = self.runner.run(&gitcmd::branches(root), None).await;
        if result.is_success() {
            snapshot.branches = parse_branches(&result.stdout);
        } else {
            snapshot.errors.push(section_error("branches", &result));
        }

        let result = self.runner.run(&gitcmd::log(root, LOG_COUNT), None).await;
        if result.is_success() {
            snapshot.history.populate(&result.stdout);
        } else {
            snapshot.errors.push(section_error("history", &result));
        }

        Ok(snapshot)
    }
}

fn section_error(section: &'static str, result: &gitseq_core::CommandResult) -> RefreshError {
    warn!(
        section,
        exit_code = result.exit_code,
        stderr = %result.stderr,
        "snapshot section failed"
    );
    RefreshError {
        section,
        exit_code: result.exit_code,
        stderr: result.stderr.clone(),
    }
}

/// Parse `branch -a` output in the HEAD-marker / short-name / full-refname
/// tab format.
fn parse_branches(raw: &str) -> Vec<Branch> {
    let mut branches = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.splitn(3, '\t');
        let (Some(marker), Some(name), Some(full)) =
            (fields.next(), fields.next(), fields.next())
        else {
            warn!(line, "skipping malformed branch line");
            continue;
        };
        if name.is_empty() {
            continue;
        }
        branches.push(Branch {
            name: name.to_string(),
            is_current: marker == "*",
            is_remote: full.starts_with("refs/remotes/"),
        });
    }
    branches
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
