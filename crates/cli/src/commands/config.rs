// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global git configuration, usable with no repository open

use anyhow::Result;
use clap::Args;
use gitseq_engine::{Ops, PipelineState, RepoContext};
use gitseq_runner::GitProcessRunner;

#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g. user.name)
    pub key: String,

    /// New value; omit to read the current value
    pub value: Option<String>,
}

pub async fn config(args: ConfigArgs, repo: RepoContext, state: PipelineState) -> Result<()> {
    let ops = Ops::new(GitProcessRunner::new(), state, repo);
    match args.value {
        Some(value) => {
            ops.set_global_config(&args.key, &value).await?;
            println!("{} = {}", args.key, value);
        }
        None => match ops.config_value(&args.key)? {
            Some(value) => println!("{value}"),
            None => println!("{} is not set", args.key),
        },
    }
    Ok(())
}
