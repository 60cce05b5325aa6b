// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository lifecycle: init and branch switching

use anyhow::Result;
use clap::Args;
use gitseq_engine::{Ops, PipelineState, RepoContext};
use gitseq_runner::GitProcessRunner;

#[derive(Args)]
pub struct SwitchArgs {
    /// Branch to check out
    pub branch: String,
}

pub async fn init(repo: RepoContext, state: PipelineState) -> Result<()> {
    let root = repo.root().display().to_string();
    Ops::new(GitProcessRunner::new(), state, repo)
        .init_repo()
        .await?;
    println!("initialized repository in {root}");
    Ok(())
}

pub async fn switch(args: SwitchArgs, repo: RepoContext, state: PipelineState) -> Result<()> {
    Ops::new(GitProcessRunner::new(), state, repo)
        .switch_branch(&args.branch)
        .await?;
    println!("switched to {}", args.branch);
    Ok(())
}
