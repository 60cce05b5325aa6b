// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gitseq-runner: the process boundary
//!
//! `ProcessRunner` is the only seam through which external commands run.
//! `GitProcessRunner` spawns real processes with live stderr streaming;
//! `FakeProcessRunner` (behind `test-support`) records calls and replays
//! stubbed results so everything above the seam tests hermetically.

pub mod process;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use process::{GitProcessRunner, ProcessRunner, Progress, RunnerConfig};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessRunner, RecordedCall};
