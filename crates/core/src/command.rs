// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed command values built from shell-like text lines

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from turning a raw command line into a typed command
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unbalanced quoting in `{0}`")]
    Malformed(String),
    #[error("empty command")]
    Empty,
}

/// A single external-tool invocation: program, arguments, working directory.
///
/// Immutable once built. The first token is always the tool's invocation
/// name; empty commands are never constructed. `cwd` is `None` only for
/// commands that deliberately run outside any repository (global config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Command {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd,
        }
    }

    /// Tokenize a shell-like line into a typed command.
    ///
    /// Standard quoting rules apply (`"..."`, `'...'`, backslash escapes).
    /// Unbalanced quoting is a parse error, never a submission; a line that
    /// tokenizes to nothing is `Empty`.
    pub fn parse(line: &str, cwd: Option<PathBuf>) -> Result<Self, CommandParseError> {
        let tokens =
            shlex::split(line).ok_or_else(|| CommandParseError::Malformed(line.to_string()))?;
        let mut tokens = tokens.into_iter();
        let program = tokens.next().ok_or(CommandParseError::Empty)?;
        Ok(Self {
            program,
            args: tokens.collect(),
            cwd,
        })
    }

    /// Whether this is a repository-initialization command (`git init`),
    /// which may run before any valid repository exists.
    pub fn is_init(&self) -> bool {
        self.program.eq_ignore_ascii_case("git") && self.args.first().is_some_and(|a| a == "init")
    }

    /// Whether this is a global configuration command (`git config --global`),
    /// which runs without a working directory and without a valid repository.
    pub fn is_global_config(&self) -> bool {
        self.program.eq_ignore_ascii_case("git")
            && self.args.iter().any(|a| a == "config")
            && self.args.iter().any(|a| a == "--global")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect();
        match shlex::try_join(parts.iter().copied()) {
            Ok(joined) => write!(f, "{}", joined),
            // A nul byte cannot be quoted; fall back to a plain join
            Err(_) => write!(f, "{}", parts.join(" ")),
        }
    }
}

/// Whether a raw command line starts a repository-initialization command.
///
/// Checked on the raw text before tokenization so the bootstrap special case
/// applies even when a later command of the sequence fails to parse.
pub fn is_init_line(line: &str) -> bool {
    let line = line.trim().to_ascii_lowercase();
    match line.strip_prefix("git init") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
