use crate::diff::{Diff, DiffEntry};
use std::fmt;

/// A single line inside a hunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunkLine {
    /// Unchanged line shown for context
    Context(String),
    /// Line removed from the original
    Delete(String),
    /// Line added in the modified version
    Add(String),
}

/// A block of nearby changes with surrounding context.
///
/// Starts are 1-based line numbers. When a side contributes no lines, its
/// start is the line the block follows, as in `git diff` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub lines: Vec<HunkLine>,
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let old_part = match self.old_len {
            0 => format!("-{},0", self.old_start),
            1 => format!("-{}", self.old_start),
            n => format!("-{},{}", self.old_start, n),
        };

        let new_part = match self.new_len {
            0 => format!("+{},0", self.new_start),
            1 => format!("+{}", self.new_start),
            n => format!("+{},{}", self.new_start, n),
        };

        writeln!(f, "@@ {} {} @@", old_part, new_part)?;

        for line in &self.lines {
            match line {
                HunkLine::Context(content) => writeln!(f, " {}", content)?,
                HunkLine::Delete(content) => writeln!(f, "-{}", content)?,
                HunkLine::Add(content) => writeln!(f, "+{}", content)?,
            }
        }

        Ok(())
    }
}

/// Group the unified view into hunks with `context` unchanged lines around
/// each change.
///
/// Changes separated by at most `2 * context` unchanged lines share a hunk.
pub fn hunks(diff: &Diff<String>, context: usize) -> Vec<Hunk> {
    let entries = diff.unified();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.is_unchanged() {
            continue;
        }
        let lo = i.saturating_sub(context);
        let hi = (i + context + 1).min(entries.len());
        match ranges.last_mut() {
            Some(last) if lo <= last.1 => last.1 = hi,
            _ => ranges.push((lo, hi)),
        }
    }

    let mut output = Vec::with_capacity(ranges.len());
    let mut old_seen = 0;
    let mut new_seen = 0;
    let mut cursor = 0;

    for (lo, hi) in ranges {
        for entry in &entries[cursor..lo] {
            old_seen += usize::from(entry.pre_index().is_some());
            new_seen += usize::from(entry.post_index().is_some());
        }
        let old_before = old_seen;
        let new_before = new_seen;

        let mut lines = Vec::with_capacity(hi - lo);
        for entry in &entries[lo..hi] {
            match entry {
                DiffEntry::NoChange(n) => {
                    lines.push(HunkLine::Context(n.value.clone()));
                    old_seen += 1;
                    new_seen += 1;
                }
                DiffEntry::Deletion(d) => {
                    lines.push(HunkLine::Delete(d.value.clone()));
                    old_seen += 1;
                }
                DiffEntry::Addition(a) => {
                    lines.push(HunkLine::Add(a.value.clone()));
                    new_seen += 1;
                }
            }
        }
        cursor = hi;

        let old_len = old_seen - old_before;
        let new_len = new_seen - new_before;
        output.push(Hunk {
            old_start: if old_len == 0 { old_before } else { old_before + 1 },
            old_len,
            new_start: if new_len == 0 { new_before } else { new_before + 1 },
            new_len,
            lines,
        });
    }

    output
}

/// Render a unified patch with `---`/`+++` headers.
///
/// Returns an empty string when the inputs are identical.
pub fn patch(diff: &Diff<String>, old_label: &str, new_label: &str, context: usize) -> String {
    let hunks = hunks(diff, context);
    if hunks.is_empty() {
        return String::new();
    }

    let mut result = format!("--- {}\n+++ {}\n", old_label, new_label);
    for hunk in &hunks {
        result.push_str(&hunk.to_string());
    }
    result
}
