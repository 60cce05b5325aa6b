// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views: status, log, branches, diff, show

use crate::output::{print_json, OutputFormat};
use anyhow::Result;
use clap::Args;
use gitseq_core::{Bucket, DiffLine};
use gitseq_engine::{Ops, PipelineState, RefreshService, RepoContext};
use gitseq_runner::GitProcessRunner;

#[derive(Args)]
pub struct LogArgs {
    /// How many commits to show
    #[arg(long, short = 'n', default_value_t = 20)]
    pub count: usize,
}

#[derive(Args)]
pub struct DiffArgs {
    /// File to diff
    pub path: String,

    /// Diff the index instead of the worktree
    #[arg(long)]
    pub staged: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Commit hash
    pub hash: String,
}

fn refresh_service(repo: RepoContext, state: PipelineState) -> RefreshService<GitProcessRunner> {
    RefreshService::new(GitProcessRunner::new(), state, repo)
}

fn ops(repo: RepoContext, state: PipelineState) -> Ops<GitProcessRunner> {
    Ops::new(GitProcessRunner::new(), state, repo)
}

pub async fn status(repo: RepoContext, state: PipelineState, format: OutputFormat) -> Result<()> {
    let snapshot = refresh_service(repo, state).snapshot().await?;
    match format {
        OutputFormat::Json => print_json(&snapshot.status),
        OutputFormat::Text => {
            for bucket in Bucket::ALL {
                let entries = snapshot.status.entries(bucket);
                if entries.is_empty() {
                    continue;
                }
                println!("{}:", bucket.label());
                for entry in entries {
                    match &entry.original_path {
                        Some(old) => println!("  {} {} (was {})", entry.code, entry.path, old),
                        None => println!("  {} {}", entry.code, entry.path),
                    }
                }
            }
            Ok(())
        }
    }
}

pub async fn log(
    args: LogArgs,
    repo: RepoContext,
    state: PipelineState,
    format: OutputFormat,
) -> Result<()> {
    // The snapshot already parses history; the count only trims display.
    let snapshot = refresh_service(repo, state).snapshot().await?;
    let entries = &snapshot.history.entries()[..args.count.min(snapshot.history.len())];
    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Text => {
            for entry in entries {
                println!(
                    "{} {} ({}, {})",
                    entry.short_id, entry.subject, entry.author, entry.date
                );
            }
            Ok(())
        }
    }
}

pub async fn branches(repo: RepoContext, state: PipelineState, format: OutputFormat) -> Result<()> {
    let snapshot = refresh_service(repo, state).snapshot().await?;
    match format {
        OutputFormat::Json => print_json(&snapshot.branches),
        OutputFormat::Text => {
            for branch in &snapshot.branches {
                let marker = if branch.is_current { "*" } else { " " };
                let origin = if branch.is_remote { " (remote)" } else { "" };
                println!("{} {}{}", marker, branch.name, origin);
            }
            Ok(())
        }
    }
}

pub async fn diff(
    args: DiffArgs,
    repo: RepoContext,
    state: PipelineState,
    format: OutputFormat,
) -> Result<()> {
    let lines = ops(repo, state).diff_file(&args.path, args.staged).await?;
    print_diff(&lines, format)
}

pub async fn show(
    args: ShowArgs,
    repo: RepoContext,
    state: PipelineState,
    format: OutputFormat,
) -> Result<()> {
    let lines = ops(repo, state).show_commit(&args.hash).await?;
    print_diff(&lines, format)
}

fn print_diff(lines: &[DiffLine], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&lines),
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line.text);
            }
            Ok(())
        }
    }
}
