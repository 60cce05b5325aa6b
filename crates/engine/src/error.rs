// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Reasons a pipeline is refused before anything runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("a pipeline is already running")]
    Busy,
    #[error("`{0}` is not a valid repository")]
    RepoInvalid(String),
}
