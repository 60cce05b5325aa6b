// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage, unstage, and discard selected files

use anyhow::Result;
use clap::Args;
use gitseq_engine::{Ops, PipelineState, RepoContext};
use gitseq_runner::GitProcessRunner;

#[derive(Args)]
pub struct PathArgs {
    /// Files to act on
    pub paths: Vec<String>,
}

fn ops(repo: RepoContext, state: PipelineState) -> Ops<GitProcessRunner> {
    Ops::new(GitProcessRunner::new(), state, repo)
}

pub async fn stage(args: PathArgs, repo: RepoContext, state: PipelineState) -> Result<()> {
    ops(repo, state).stage(&args.paths).await?;
    println!("staged {} file(s)", args.paths.len());
    Ok(())
}

pub async fn unstage(args: PathArgs, repo: RepoContext, state: PipelineState) -> Result<()> {
    ops(repo, state).unstage(&args.paths).await?;
    println!("unstaged {} file(s)", args.paths.len());
    Ok(())
}

pub async fn discard(args: PathArgs, repo: RepoContext, state: PipelineState) -> Result<()> {
    ops(repo, state).discard(&args.paths).await?;
    println!("discarded changes to {} file(s)", args.paths.len());
    Ok(())
}
