// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Injected single-flight state shared by everything that submits commands

use crate::error::PipelineError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The busy flag for one engine instance. Cloning shares the flag, so a
/// driver, a refresh service, and any capability gate handed the same
/// state observe the same single-flight policy.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    busy: Arc<AtomicBool>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Claim the busy flag. Fails with `Busy` if a run is already in
    /// flight; the returned guard releases the flag on drop, including on
    /// early returns and panics in the caller.
    pub fn try_begin(&self) -> Result<BusyGuard, PipelineError> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| PipelineError::Busy)?;
        Ok(BusyGuard {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// RAII release of the busy flag.
#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
