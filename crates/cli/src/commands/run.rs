// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gitseq run [file]` - run a command sequence, stopping at the first
//! failure

use crate::output::{print_json, OutputFormat};
use anyhow::Result;
use clap::Args;
use gitseq_core::RunOutcome;
use gitseq_engine::{PipelineDriver, PipelineState, RepoContext};
use gitseq_runner::GitProcessRunner;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Args)]
pub struct RunArgs {
    /// File with one command per line; `-` or omitted reads stdin
    pub file: Option<PathBuf>,

    /// Kill any single command after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn run(
    args: RunArgs,
    repo: RepoContext,
    state: PipelineState,
    format: OutputFormat,
) -> Result<()> {
    let text = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let runner = match args.timeout {
        Some(secs) => GitProcessRunner::with_timeout(Duration::from_secs(secs)),
        None => GitProcessRunner::new(),
    };
    let driver = PipelineDriver::new(runner, state, repo);

    // Progress lines go to stderr as they arrive, keeping stdout for the
    // outcome.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let echo = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            eprintln!("{line}");
        }
    });

    let outcome = driver.run_sequence(&text, Some(tx)).await?;
    let _ = echo.await;

    if format == OutputFormat::Json {
        print_json(&outcome)?;
    }
    match outcome {
        RunOutcome::Completed { results } => {
            if format == OutputFormat::Text {
                println!("ok: {} command(s)", results.len());
            }
            Ok(())
        }
        RunOutcome::Aborted { index, reason, .. } => {
            anyhow::bail!("aborted at command {index}: {reason}")
        }
    }
}
