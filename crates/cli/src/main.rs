// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gitseq - sequenced git pipelines with live progress

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, files, repo, run, view};
use gitseq_engine::{PipelineState, RepoContext};
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gitseq",
    version,
    about = "Run git command sequences that stop at the first failure"
)]
struct Cli {
    /// Repository root directory
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command sequence from a file or stdin
    Run(run::RunArgs),
    /// Working-tree status, grouped by section
    Status,
    /// Recent commit history
    Log(view::LogArgs),
    /// Local and remote branches
    Branches,
    /// Diff one file against the worktree or the index
    Diff(view::DiffArgs),
    /// One commit with its change summary
    Show(view::ShowArgs),
    /// Stage files
    Stage(files::PathArgs),
    /// Unstage files
    Unstage(files::PathArgs),
    /// Discard working-tree changes to files
    Discard(files::PathArgs),
    /// Read or write global git configuration
    Config(config::ConfigArgs),
    /// Initialize a repository in the target directory
    Init,
    /// Check out another branch
    Switch(repo::SwitchArgs),
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let repo = RepoContext::new(&cli.repo);
    let state = PipelineState::new();

    match cli.command {
        Commands::Run(args) => run::run(args, repo, state, cli.format).await,
        Commands::Status => view::status(repo, state, cli.format).await,
        Commands::Log(args) => view::log(args, repo, state, cli.format).await,
        Commands::Branches => view::branches(repo, state, cli.format).await,
        Commands::Diff(args) => view::diff(args, repo, state, cli.format).await,
        Commands::Show(args) => view::show(args, repo, state, cli.format).await,
        Commands::Stage(args) => files::stage(args, repo, state).await,
        Commands::Unstage(args) => files::unstage(args, repo, state).await,
        Commands::Discard(args) => files::discard(args, repo, state).await,
        Commands::Config(args) => config::config(args, repo, state).await,
        Commands::Init => repo::init(repo, state).await,
        Commands::Switch(args) => repo::switch(args, repo, state).await,
    }
}
