// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Porcelain v1 status parsing into the four display buckets

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// The four fixed sections of the working-tree view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    Staged,
    Unstaged,
    Untracked,
    Unmerged,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::Staged,
        Bucket::Unstaged,
        Bucket::Untracked,
        Bucket::Unmerged,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Staged => "Staged Changes",
            Bucket::Unstaged => "Unstaged Changes",
            Bucket::Untracked => "Untracked Files",
            Bucket::Unmerged => "Unmerged Paths",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One path in one bucket. A renamed file keeps its new path in `path`
/// (what staging commands must name) and its old path in `original_path`
/// (what a display can show alongside).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub bucket: Bucket,
    pub path: String,
    pub original_path: Option<String>,
    pub code: String,
}

/// Parsed `status --porcelain=v1` output.
///
/// A path may legitimately appear in both the staged and unstaged buckets
/// (for example `MM`). Input order is preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusModel {
    staged: Vec<StatusEntry>,
    unstaged: Vec<StatusEntry>,
    untracked: Vec<StatusEntry>,
    unmerged: Vec<StatusEntry>,
}

impl StatusModel {
    /// Parse porcelain v1 text. Unrecognized lines are logged and skipped;
    /// they never abort the parse.
    pub fn parse(raw: &str) -> Self {
        let mut model = Self::default();
        for line in raw.lines() {
            if line.is_empty() {
                continue;
            }
            let (Some(code), Some(rest)) = (line.get(..2), line.get(3..)) else {
                warn!(line, "skipping malformed status line");
                continue;
            };
            model.classify(code, rest);
        }
        model
    }

    fn classify(&mut self, code: &str, rest: &str) {
        let mut chars = code.chars();
        let (Some(x), Some(y)) = (chars.next(), chars.next()) else {
            return;
        };

        if code == "??" {
            self.untracked.push(entry(Bucket::Untracked, code, rest, false));
            return;
        }
        // Conflict states: any U, or both-added / both-deleted.
        if x == 'U' || y == 'U' || code == "AA" || code == "DD" {
            self.unmerged.push(entry(Bucket::Unmerged, code, rest, false));
            return;
        }
        let renamed = x == 'R' || x == 'C';
        if x != ' ' {
            self.staged.push(entry(Bucket::Staged, code, rest, renamed));
        }
        if y != ' ' && y != '?' {
            self.unstaged.push(entry(Bucket::Unstaged, code, rest, renamed));
        }
    }

    pub fn entries(&self, bucket: Bucket) -> &[StatusEntry] {
        match bucket {
            Bucket::Staged => &self.staged,
            Bucket::Unstaged => &self.unstaged,
            Bucket::Untracked => &self.untracked,
            Bucket::Unmerged => &self.unmerged,
        }
    }

    /// Replace the model contents from fresh porcelain output.
    pub fn populate(&mut self, raw: &str) {
        *self = Self::parse(raw);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Bucket::ALL.iter().all(|b| self.entries(*b).is_empty())
    }

    /// The paths in one bucket, in display order.
    pub fn files_in(&self, bucket: Bucket) -> Vec<String> {
        self.entries(bucket).iter().map(|e| e.path.clone()).collect()
    }

    /// Resolve a selection of (bucket, row) pairs to paths grouped per
    /// bucket. Out-of-range rows are ignored; duplicates are dropped while
    /// preserving first-seen order.
    pub fn selected_files(&self, selection: &[(Bucket, usize)]) -> BTreeMap<Bucket, Vec<String>> {
        let mut grouped: BTreeMap<Bucket, Vec<String>> = BTreeMap::new();
        for &(bucket, row) in selection {
            let Some(entry) = self.entries(bucket).get(row) else {
                continue;
            };
            let paths = grouped.entry(bucket).or_default();
            if !paths.contains(&entry.path) {
                paths.push(entry.path.clone());
            }
        }
        grouped
    }
}

fn entry(bucket: Bucket, code: &str, rest: &str, renamed: bool) -> StatusEntry {
    let rest = unquote(rest);
    let (path, original_path) = if renamed {
        match rest.split_once(" -> ") {
            Some((old, new)) => (new.to_string(), Some(old.to_string())),
            None => (rest, None),
        }
    } else {
        (rest, None)
    };
    StatusEntry {
        bucket,
        path,
        original_path,
        code: code.to_string(),
    }
}

/// Undo the C-style quoting git applies to paths with special characters.
/// Plain paths pass through untouched.
fn unquote(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
        return raw.to_string();
    }
    let inner = &bytes[1..bytes.len() - 1];
    let mut out = Vec::with_capacity(inner.len());
    let mut i = 0;
    while i < inner.len() {
        if inner[i] != b'\\' || i + 1 >= inner.len() {
            out.push(inner[i]);
            i += 1;
            continue;
        }
        i += 1;
        match inner[i] {
            b'n' => {
                out.push(b'\n');
                i += 1;
            }
            b't' => {
                out.push(b'\t');
                i += 1;
            }
            b'"' => {
                out.push(b'"');
                i += 1;
            }
            b'\\' => {
                out.push(b'\\');
                i += 1;
            }
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 && i < inner.len() && inner[i].is_ascii_digit() && inner[i] < b'8'
                {
                    let next = value * 8 + u32::from(inner[i] - b'0');
                    // A third digit that overflows a byte belongs to the path.
                    if next > 0xFF {
                        break;
                    }
                    value = next;
                    i += 1;
                    digits += 1;
                }
                out.push(value as u8);
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
