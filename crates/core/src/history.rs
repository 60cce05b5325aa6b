// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History parsing for graph-decorated, tab-separated log output

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::warn;

// Matches one formatted log line: optional graph glyphs, then
// hash <TAB> author <TAB> date <TAB> subject.
#[allow(clippy::expect_used)]
static LOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\\/|*._ \-]*([0-9a-fA-F]+)\t([^\t]*)\t([^\t]*)\t(.*)$")
        .expect("constant regex pattern is valid")
});

// A line that is nothing but graph structure (merge elbows and edges).
#[allow(clippy::expect_used)]
static GRAPH_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\\/|*._\-]+$").expect("constant regex pattern is valid")
});

/// One commit row of the history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub short_id: String,
    pub author: String,
    pub date: String,
    pub subject: String,
}

/// Parsed commit history.
///
/// Graph-only connector lines are dropped silently; anything else that
/// fails to match the expected shape is logged and skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryModel {
    entries: Vec<LogEntry>,
}

impl HistoryModel {
    pub fn parse(raw: &str) -> Self {
        let mut entries = Vec::new();
        for line in raw.lines() {
            if line.trim().is_empty() || GRAPH_ONLY.is_match(line) {
                continue;
            }
            let Some(caps) = LOG_LINE.captures(line) else {
                warn!(line, "skipping unrecognized log line");
                continue;
            };
            entries.push(LogEntry {
                short_id: caps[1].to_string(),
                author: caps[2].to_string(),
                date: caps[3].to_string(),
                subject: caps[4].to_string(),
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn populate(&mut self, raw: &str) {
        *self = Self::parse(raw);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
