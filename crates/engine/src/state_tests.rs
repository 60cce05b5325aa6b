// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn begin_sets_and_drop_clears() {
    let state = PipelineState::new();
    assert!(!state.is_busy());
    let guard = state.try_begin().unwrap();
    assert!(state.is_busy());
    drop(guard);
    assert!(!state.is_busy());
}

#[test]
fn second_begin_is_refused_while_held() {
    let state = PipelineState::new();
    let _guard = state.try_begin().unwrap();
    assert_eq!(state.try_begin().unwrap_err(), PipelineError::Busy);
}

#[test]
fn clones_share_the_flag() {
    let state = PipelineState::new();
    let other = state.clone();
    let _guard = state.try_begin().unwrap();
    assert!(other.is_busy());
    assert_eq!(other.try_begin().unwrap_err(), PipelineError::Busy);
}
