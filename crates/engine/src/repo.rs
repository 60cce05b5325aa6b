// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The currently open repository

use std::path::{Path, PathBuf};

/// A directory the engine treats as the open repository. Validity is
/// re-checked on every use, never cached: `init` or an external delete can
/// change it between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    root: PathBuf,
}

impl RepoContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A valid repository is an existing directory containing `.git`.
    pub fn is_valid(&self) -> bool {
        self.root.is_dir() && self.root.join(".git").is_dir()
    }
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
