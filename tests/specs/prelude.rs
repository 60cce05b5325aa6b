//! Shared helpers for the CLI specs.

pub use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// A scratch directory the CLI treats as its repository root. Global git
/// config is redirected into the scratch directory so the specs never
/// touch the machine's real configuration.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// A bare `.git` directory, enough for validity checks without a real
    /// `git init`.
    pub fn fake_git_dir(&self) {
        std::fs::create_dir(self.path().join(".git")).unwrap();
    }

    pub fn gitseq(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("gitseq").unwrap();
        cmd.arg("--repo").arg(self.path());
        cmd.env("GIT_CONFIG_GLOBAL", self.path().join("scratch-gitconfig"));
        cmd
    }
}

/// Command lines that give the scratch repo an identity, so commits work
/// on machines with no git config at all.
pub const IDENTITY: &str = "git config user.email spec@example.com\ngit config user.name Spec";
