// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gitseq-core: typed commands, the pipeline state machine, and parsers
//! for git's textual output
//!
//! This crate provides:
//! - Typed `Command` values built from shell-like text lines
//! - A pure `PipelineRun` sequencer with abort-on-first-failure semantics
//! - Parsers for porcelain status, formatted log, and diff/show output
//! - The fixed capability classification used to gate client operations

pub mod capability;
pub mod command;
pub mod diff;
pub mod gitcmd;
pub mod history;
pub mod pipeline;
pub mod result;
pub mod status;

// Re-exports
pub use capability::Capability;
pub use command::{is_init_line, Command, CommandParseError};
pub use diff::{classify_line, render, DiffLine, DiffLineKind};
pub use history::{HistoryModel, LogEntry};
pub use pipeline::{AbortReason, PipelineRun, RunOutcome, RunState, Step};
pub use result::{CommandResult, EXIT_KILLED, EXIT_LAUNCH_FAILED, EXIT_REPO_INVALID};
pub use status::{Bucket, StatusEntry, StatusModel};
