// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command results and sentinel exit codes

use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Exit code reported when the external tool could not be started at all.
pub const EXIT_LAUNCH_FAILED: i32 = -1;
/// Exit code reported when the timeout policy forcibly terminated a command,
/// or the process died to a signal without reporting a code.
pub const EXIT_KILLED: i32 = -2;
/// Exit code reported when a command was refused because no valid
/// repository is open.
pub const EXIT_REPO_INVALID: i32 = -3;

/// Outcome of one submitted command. Produced exactly once per submission.
///
/// Exit code 0 is success; any other value is failure. Real tool exit codes
/// are surfaced untranslated, so the negative sentinels above never collide
/// with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// A successful result carrying only stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, "")
    }

    /// Result for a process that could not be launched (missing binary,
    /// invalid working directory).
    pub fn launch_failed(command: &str, error: &str) -> Self {
        Self::new(
            EXIT_LAUNCH_FAILED,
            "",
            format!("failed to launch `{}`: {}", command, error),
        )
    }

    /// Result for a command killed by the configured timeout.
    pub fn killed(command: &str, timeout: Duration) -> Self {
        Self::new(
            EXIT_KILLED,
            "",
            format!("`{}` killed after {:?}", command, timeout),
        )
    }

    /// Result for a command refused because the repository is not valid.
    pub fn repo_invalid(path: &Path) -> Self {
        Self::new(
            EXIT_REPO_INVALID,
            "",
            format!("`{}` is not a valid repository", path.display()),
        )
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn was_killed(&self) -> bool {
        self.exit_code == EXIT_KILLED
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
