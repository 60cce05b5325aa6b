// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gitseq-engine: drives pipelines over a `ProcessRunner` and keeps the
//! view models fresh
//!
//! The engine owns the single-flight policy: at most one pipeline runs at
//! a time, guarded by an injected `PipelineState`. On top of the pipeline
//! driver sit the refresh service (status, branches, history snapshots)
//! and the one-shot operations (stage, unstage, discard, diff, show).

pub mod driver;
pub mod error;
pub mod ops;
pub mod refresh;
pub mod repo;
pub mod state;

pub use driver::PipelineDriver;
pub use error::PipelineError;
pub use ops::{OpError, Ops};
pub use refresh::{Branch, RefreshError, RefreshService, RepoSnapshot};
pub use repo::RepoContext;
pub use state::{BusyGuard, PipelineState};
