// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stateless line classification for diff and show output

use serde::Serialize;

/// Display class of a single diff line. Each line is classified on its own,
/// with no carried state between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiffLineKind {
    /// Commit metadata from `show` output (`commit`, `Author:`, `Date:`).
    CommitMeta,
    /// File-level header lines (`diff`, `index`, `---`, `+++`).
    Header,
    /// Hunk range markers (`@@`).
    Hunk,
    /// Merge-conflict markers.
    Conflict,
    Add,
    Remove,
    Context,
}

/// One classified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

/// Classify one raw line by its leading characters.
///
/// Conflict markers are checked before the add/remove prefixes so that
/// `<<<<<<<` inside an added region of a diff still reads as a conflict
/// marker rather than context.
pub fn classify_line(line: &str) -> DiffLineKind {
    if line.starts_with("commit ") || line.starts_with("Author:") || line.starts_with("Date:") {
        return DiffLineKind::CommitMeta;
    }
    if line.starts_with("diff ")
        || line.starts_with("index ")
        || line.starts_with("---")
        || line.starts_with("+++")
    {
        return DiffLineKind::Header;
    }
    if line.starts_with("@@") {
        return DiffLineKind::Hunk;
    }
    if line.starts_with("<<<<<<<") || line.starts_with("=======") || line.starts_with(">>>>>>>") {
        return DiffLineKind::Conflict;
    }
    if line.starts_with('+') {
        return DiffLineKind::Add;
    }
    if line.starts_with('-') {
        return DiffLineKind::Remove;
    }
    DiffLineKind::Context
}

/// Classify every line of a diff or show body, preserving text verbatim.
pub fn render(text: &str) -> Vec<DiffLine> {
    text.lines()
        .map(|line| DiffLine {
            kind: classify_line(line),
            text: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
