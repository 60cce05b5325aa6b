// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builders for the git invocations the engine issues on its own

use crate::command::Command;
use std::path::Path;

// Log format consumed by `HistoryModel::parse`: hash, author, relative
// date, subject, tab-separated, with the commit graph drawn in front.
const LOG_FORMAT: &str = "--pretty=format:%h%x09%an%x09%ar%x09%s";

// Branch format consumed by `parse_branches`: HEAD marker, short name,
// full refname.
const BRANCH_FORMAT: &str = "--format=%(HEAD)%09%(refname:short)%09%(refname)";

fn git<I, S>(args: I, cwd: Option<&Path>) -> Command
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Command::new("git", args, cwd.map(Path::to_path_buf))
}

pub fn status(repo: &Path) -> Command {
    git(["status", "--porcelain=v1"], Some(repo))
}

pub fn log(repo: &Path, count: usize) -> Command {
    git(
        [
            "log".to_string(),
            LOG_FORMAT.to_string(),
            "--graph".to_string(),
            "-n".to_string(),
            count.to_string(),
        ],
        Some(repo),
    )
}

pub fn branches(repo: &Path) -> Command {
    git(
        ["branch", "-a", BRANCH_FORMAT, "--sort=-committerdate"],
        Some(repo),
    )
}

pub fn current_branch(repo: &Path) -> Command {
    git(["rev-parse", "--abbrev-ref", "HEAD"], Some(repo))
}

pub fn stage(repo: &Path, paths: &[String]) -> Command {
    with_paths(repo, &["add"], paths)
}

pub fn unstage(repo: &Path, paths: &[String]) -> Command {
    with_paths(repo, &["reset", "HEAD"], paths)
}

pub fn discard(repo: &Path, paths: &[String]) -> Command {
    with_paths(repo, &["checkout"], paths)
}

fn with_paths(repo: &Path, prefix: &[&str], paths: &[String]) -> Command {
    let mut args: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
    // `--` keeps paths that look like refs or options unambiguous.
    args.push("--".to_string());
    args.extend(paths.iter().cloned());
    git(args, Some(repo))
}

pub fn diff_file(repo: &Path, path: &str, staged: bool) -> Command {
    let mut args = vec!["diff".to_string()];
    if staged {
        args.push("--staged".to_string());
    }
    args.push("--".to_string());
    args.push(path.to_string());
    git(args, Some(repo))
}

pub fn switch(repo: &Path, branch: &str) -> Command {
    git(["checkout", branch], Some(repo))
}

pub fn show(repo: &Path, hash: &str) -> Command {
    git(["show", "--stat", hash], Some(repo))
}

pub fn init(repo: &Path) -> Command {
    git(["init"], Some(repo))
}

/// Global config runs with no working directory; it must work with no
/// repository open at all.
pub fn config_global(key: &str, value: &str) -> Command {
    git(["config", "--global", key, value], None)
}

pub fn config_get_global(key: &str) -> Command {
    git(["config", "--global", "--get", key], None)
}

#[cfg(test)]
#[path = "gitcmd_tests.rs"]
mod tests;
