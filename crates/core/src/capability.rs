// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Enumerated client capabilities and the rules for when each is enabled

use serde::Serialize;

/// Every operation a client can gate on engine state. The set is fixed;
/// clients match on variants instead of looking anything up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    OpenRepository,
    GlobalConfig,
    ClearOutput,
    Quit,
    About,
    InitRepository,
    RunSequence,
    StageFiles,
    UnstageFiles,
    DiscardChanges,
    ShowDiff,
    ShowCommit,
    RefreshViews,
    SwitchBranch,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Capability::OpenRepository,
        Capability::GlobalConfig,
        Capability::ClearOutput,
        Capability::Quit,
        Capability::About,
        Capability::InitRepository,
        Capability::RunSequence,
        Capability::StageFiles,
        Capability::UnstageFiles,
        Capability::DiscardChanges,
        Capability::ShowDiff,
        Capability::ShowCommit,
        Capability::RefreshViews,
        Capability::SwitchBranch,
    ];

    /// Whether this capability stays available while a pipeline is running.
    pub fn available_while_busy(self) -> bool {
        matches!(
            self,
            Capability::OpenRepository
                | Capability::GlobalConfig
                | Capability::ClearOutput
                | Capability::Quit
                | Capability::About
        )
    }

    /// Whether this capability needs a valid repository to be open.
    pub fn requires_repo(self) -> bool {
        !matches!(
            self,
            Capability::OpenRepository
                | Capability::GlobalConfig
                | Capability::ClearOutput
                | Capability::Quit
                | Capability::About
                | Capability::InitRepository
        )
    }

    /// The gating rule: busy suppresses everything not whitelisted for it,
    /// and repository-bound capabilities need a valid repository.
    pub fn is_enabled(self, busy: bool, repo_valid: bool) -> bool {
        if busy && !self.available_while_busy() {
            return false;
        }
        if self.requires_repo() && !repo_valid {
            return false;
        }
        true
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
