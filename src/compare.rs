//! Line comparison modes and diff options for text input.

use crate::diff::Diff;
use crate::lcs::{self, LcsError};
use std::borrow::Cow;

/// How whitespace participates in line comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Whitespace {
    /// Whitespace must match exactly
    #[default]
    Exact,
    /// Leading and trailing whitespace is ignored and inner runs compare as
    /// one space
    Collapse,
    /// All whitespace is ignored
    Ignore,
}

/// Rules for deciding whether two lines are the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineComparison {
    pub ignore_case: bool,
    pub whitespace: Whitespace,
}

impl LineComparison {
    /// Byte-for-byte comparison
    pub const EXACT: Self = Self {
        ignore_case: false,
        whitespace: Whitespace::Exact,
    };

    /// Reduce a line to the key used for comparison.
    ///
    /// Lines are equal under this comparison exactly when their keys are.
    #[must_use]
    pub fn key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let line: Cow<'a, str> = match self.whitespace {
            Whitespace::Exact => Cow::Borrowed(line),
            Whitespace::Collapse => {
                let mut words = line.split_whitespace();
                match words.next() {
                    None => Cow::Borrowed(""),
                    Some(first) => {
                        let mut collapsed = String::from(first);
                        for word in words {
                            collapsed.push(' ');
                            collapsed.push_str(word);
                        }
                        if collapsed == line {
                            Cow::Borrowed(line)
                        } else {
                            Cow::Owned(collapsed)
                        }
                    }
                }
            }
            Whitespace::Ignore => {
                if line.chars().any(char::is_whitespace) {
                    Cow::Owned(line.chars().filter(|c| !c.is_whitespace()).collect())
                } else {
                    Cow::Borrowed(line)
                }
            }
        };

        if self.ignore_case {
            Cow::Owned(line.to_lowercase())
        } else {
            line
        }
    }

    /// True when `a` and `b` are the same line under this comparison.
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }
}

/// Options for diffing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub comparison: LineComparison,
    /// Upper bound on LCS table cells, `None` for no bound
    pub max_table_cells: Option<usize>,
}

impl DiffOptions {
    #[must_use]
    pub fn with_comparison(mut self, comparison: LineComparison) -> Self {
        self.comparison = comparison;
        self
    }

    #[must_use]
    pub fn with_max_table_cells(mut self, limit: usize) -> Self {
        self.max_table_cells = Some(limit);
        self
    }
}

/// Diff two texts line by line.
///
/// Lines are split with [`str::lines`], so a trailing newline does not add an
/// empty line and `\r\n` endings are accepted. Each line is reduced to its
/// comparison key once; unchanged entries keep the text of the original.
///
/// # Examples
///
/// ```
/// use kindling::compare::{diff_lines, DiffOptions, LineComparison, Whitespace};
///
/// let options = DiffOptions::default().with_comparison(LineComparison {
///     ignore_case: false,
///     whitespace: Whitespace::Collapse,
/// });
/// let diff = diff_lines("a  b\nc\n", "a b\nd\n", &options).unwrap();
/// assert_eq!(diff.common_len(), 1);
/// assert_eq!(diff.additions()[0].value, "d");
/// ```
///
/// # Errors
///
/// Returns [`LcsError::TableTooLarge`] when `max_table_cells` is set and the
/// differing lines need a larger table.
pub fn diff_lines(
    original: &str,
    modified: &str,
    options: &DiffOptions,
) -> Result<Diff<String>, LcsError> {
    let original: Vec<String> = original.lines().map(String::from).collect();
    let modified: Vec<String> = modified.lines().map(String::from).collect();
    diff_line_vecs(&original, &modified, options)
}

/// Diff two already-split line sequences.
///
/// # Errors
///
/// Returns [`LcsError::TableTooLarge`] when `max_table_cells` is set and the
/// differing lines need a larger table.
pub fn diff_line_vecs(
    original: &[String],
    modified: &[String],
    options: &DiffOptions,
) -> Result<Diff<String>, LcsError> {
    let comparison = options.comparison;
    let limit = options.max_table_cells;

    if comparison == LineComparison::EXACT {
        return Diff::try_with_equality(original, modified, |a, b| a == b, limit);
    }

    let original_keys: Vec<Cow<'_, str>> = original.iter().map(|l| comparison.key(l)).collect();
    let modified_keys: Vec<Cow<'_, str>> = modified.iter().map(|l| comparison.key(l)).collect();
    let matches =
        lcs::bounded_matching_pairs(&original_keys, &modified_keys, |a, b| a == b, limit)?;

    Ok(Diff::from_matches(original, modified, &matches))
}
