//! Plain-text views of a [`Diff`].
//!
//! Three layouts are provided:
//!
//! - [`patch`]: unified diff hunks with `@@ -a,b +c,d @@` headers
//! - [`listing`]: every line with old and new line-number gutters
//! - [`side_by_side`]: original and modified in two columns
//!
//! Example listing output:
//! ```text
//! 1 1   [main] gateway started
//! 2   - [main] license expired
//!   2 + [main] license activated
//! 3 3   [main] ready
//! ```

mod hunk;

pub use hunk::{Hunk, HunkLine, hunks, patch};

use crate::diff::{Diff, DiffEntry};

/// Render every unified entry with line-number gutters and a change marker.
///
/// Line numbers are 1-based; the gutter of the side an entry is missing from
/// stays blank.
pub fn listing(diff: &Diff<String>) -> String {
    let entries = diff.unified();
    let highest = entries
        .iter()
        .flat_map(|e| [e.pre_index(), e.post_index()])
        .flatten()
        .max()
        .map_or(0, |i| i + 1);
    let width = highest.to_string().len();

    let mut result = String::new();
    for entry in entries {
        let gutter = |index: Option<usize>| match index {
            Some(i) => format!("{:>width$}", i + 1),
            None => " ".repeat(width),
        };
        let marker = match entry {
            DiffEntry::NoChange(_) => ' ',
            DiffEntry::Deletion(_) => '-',
            DiffEntry::Addition(_) => '+',
        };

        result.push_str(&gutter(entry.pre_index()));
        result.push(' ');
        result.push_str(&gutter(entry.post_index()));
        result.push(' ');
        result.push(marker);
        if !entry.value().is_empty() {
            result.push(' ');
            result.push_str(entry.value());
        }
        result.push('\n');
    }

    result
}

/// Render original and modified side by side, each column `width` characters
/// wide.
///
/// The separator column reads ` ` for unchanged rows, `|` where a deletion is
/// paired with an addition, `<` for a deletion alone and `>` for an addition
/// alone. Longer lines are truncated to the column width.
pub fn side_by_side(diff: &Diff<String>, width: usize) -> String {
    let mut result = String::new();
    let mut deleted: Vec<&str> = Vec::new();
    let mut added: Vec<&str> = Vec::new();

    for entry in diff.unified() {
        match entry {
            DiffEntry::Deletion(d) => deleted.push(&d.value),
            DiffEntry::Addition(a) => added.push(&a.value),
            DiffEntry::NoChange(n) => {
                flush_block(&mut result, &mut deleted, &mut added, width);
                push_row(&mut result, &n.value, ' ', &n.value, width);
            }
        }
    }
    flush_block(&mut result, &mut deleted, &mut added, width);

    result
}

/// Emit a run of deletions and additions, pairing them row by row.
fn flush_block(
    result: &mut String,
    deleted: &mut Vec<&str>,
    added: &mut Vec<&str>,
    width: usize,
) {
    let rows = deleted.len().max(added.len());
    for row in 0..rows {
        match (deleted.get(row), added.get(row)) {
            (Some(left), Some(right)) => push_row(result, left, '|', right, width),
            (Some(left), None) => push_row(result, left, '<', "", width),
            (None, Some(right)) => push_row(result, "", '>', right, width),
            (None, None) => {}
        }
    }
    deleted.clear();
    added.clear();
}

fn push_row(result: &mut String, left: &str, marker: char, right: &str, width: usize) {
    let left: String = left.chars().take(width).collect();
    let right: String = right.chars().take(width).collect();
    let row = format!("{:<width$} {} {}", left, marker, right);
    result.push_str(row.trim_end());
    result.push('\n');
}
