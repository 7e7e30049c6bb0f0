//! Longest common subsequence over arbitrary element types.
//!
//! The engine fills the classic dynamic-programming length table and walks it
//! back to recover which positions of both sequences take part in the
//! subsequence. Matching is driven by a caller-supplied equality predicate, so
//! lines can be compared case-insensitively or with whitespace normalized
//! without copying the inputs.
//!
//! Shared leading and trailing elements are paired up front and only the
//! differing middle is tabulated. Matching a shared prefix or suffix directly
//! never shortens the result, whatever the predicate.
//!
//! # Examples
//!
//! ```
//! use kindling::lcs::{longest_common_subsequence, matching_pairs, Match};
//!
//! let a = ["a", "b", "c", "d"];
//! let b = ["b", "x", "d"];
//!
//! let common = longest_common_subsequence(&a, &b, |x, y| x == y);
//! assert_eq!(common, vec!["b", "d"]);
//!
//! let pairs = matching_pairs(&a, &b, |x, y| x == y);
//! assert_eq!(pairs, vec![
//!     Match { pre_index: 1, post_index: 0 },
//!     Match { pre_index: 3, post_index: 2 },
//! ]);
//! ```

use error_set::error_set;

error_set! {
    /// Errors from computing a longest common subsequence
    LcsError := {
        /// The length table would need more cells than the configured limit
        #[display("Comparison needs {cells} table cells, limit is {limit}")]
        TableTooLarge { cells: usize, limit: usize },
    }
}

/// A pair of positions that hold the same element in both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Index in the original sequence
    pub pre_index: usize,
    /// Index in the modified sequence
    pub post_index: usize,
}

/// Length table for the longest common subsequence of two sequences.
///
/// Cell `(i, j)` holds the LCS length of `a[..i]` and `b[..j]`, so the table
/// has `(a.len() + 1) * (b.len() + 1)` cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `a` and `b` using `eq` to compare elements.
    pub fn build<T, F>(a: &[T], b: &[T], eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if eq(&a[i - 1], &b[j - 1]) {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        tracing::trace!(rows, cols, "filled lcs table");

        Self { rows, cols, cells }
    }

    /// LCS length of `a[..i]` and `b[..j]`.
    ///
    /// Out-of-range coordinates read as zero.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        if i >= self.rows || j >= self.cols {
            return 0;
        }
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// True when the inputs share no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk the table back from the bottom-right corner and return the
    /// matched positions in ascending order.
    ///
    /// Columns are consumed first: when dropping `b[j-1]` keeps the length,
    /// it is not part of the subsequence. Otherwise the row moves up while
    /// that keeps the length, and the remaining cell is a match.
    #[must_use]
    pub fn backtrack(&self) -> Vec<Match> {
        let mut matches = Vec::with_capacity(self.len());
        let mut i = self.rows - 1;
        let mut j = self.cols - 1;

        while i > 0 && j > 0 {
            let here = self.get(i, j);
            if here == self.get(i, j - 1) {
                j -= 1;
            } else if here == self.get(i - 1, j) {
                i -= 1;
            } else {
                matches.push(Match {
                    pre_index: i - 1,
                    post_index: j - 1,
                });
                i -= 1;
                j -= 1;
            }
        }

        matches.reverse();
        matches
    }
}

/// Positions of a longest common subsequence of `a` and `b`.
///
/// Both `pre_index` and `post_index` are strictly increasing across the
/// returned pairs.
pub fn matching_pairs<T, F>(a: &[T], b: &[T], eq: F) -> Vec<Match>
where
    F: Fn(&T, &T) -> bool,
{
    let (prefix, suffix) = shared_ends(a, b, &eq);
    let core = LcsTable::build(
        &a[prefix..a.len() - suffix],
        &b[prefix..b.len() - suffix],
        &eq,
    );
    assemble(a.len(), b.len(), prefix, suffix, &core)
}

/// Like [`matching_pairs`], but refuses to build a table larger than `limit`
/// cells.
///
/// The limit applies to the differing middle only, so long inputs with small
/// edits stay cheap.
///
/// # Errors
///
/// Returns [`LcsError::TableTooLarge`] when the table for the differing part
/// of the inputs needs more than `limit` cells.
pub fn bounded_matching_pairs<T, F>(
    a: &[T],
    b: &[T],
    eq: F,
    limit: Option<usize>,
) -> Result<Vec<Match>, LcsError>
where
    F: Fn(&T, &T) -> bool,
{
    let (prefix, suffix) = shared_ends(a, b, &eq);
    let core_a = &a[prefix..a.len() - suffix];
    let core_b = &b[prefix..b.len() - suffix];

    if let Some(limit) = limit {
        let cells = (core_a.len() + 1).saturating_mul(core_b.len() + 1);
        if cells > limit {
            return Err(LcsError::TableTooLarge { cells, limit });
        }
    }

    let core = LcsTable::build(core_a, core_b, &eq);
    Ok(assemble(a.len(), b.len(), prefix, suffix, &core))
}

/// Elements of a longest common subsequence, taken from `b`.
pub fn longest_common_subsequence<T, F>(a: &[T], b: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    matching_pairs(a, b, eq)
        .into_iter()
        .map(|m| b[m.post_index].clone())
        .collect()
}

/// Count the leading and trailing elements both sequences agree on.
///
/// The suffix never overlaps the prefix.
fn shared_ends<T, F>(a: &[T], b: &[T], eq: &F) -> (usize, usize)
where
    F: Fn(&T, &T) -> bool,
{
    let prefix = a
        .iter()
        .zip(b.iter())
        .take_while(|&(x, y)| eq(x, y))
        .count();

    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|&(x, y)| eq(x, y))
        .count();

    if prefix > 0 || suffix > 0 {
        tracing::trace!(prefix, suffix, "matched shared ends");
    }

    (prefix, suffix)
}

/// Stitch prefix, tabulated middle and suffix matches into one list.
fn assemble(
    a_len: usize,
    b_len: usize,
    prefix: usize,
    suffix: usize,
    core: &LcsTable,
) -> Vec<Match> {
    let mut matches = Vec::with_capacity(prefix + core.len() + suffix);

    matches.extend((0..prefix).map(|k| Match {
        pre_index: k,
        post_index: k,
    }));

    matches.extend(core.backtrack().into_iter().map(|m| Match {
        pre_index: m.pre_index + prefix,
        post_index: m.post_index + prefix,
    }));

    matches.extend((0..suffix).map(|k| Match {
        pre_index: a_len - suffix + k,
        post_index: b_len - suffix + k,
    }));

    matches
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lcs_string(a: &str, b: &str) -> String {
        longest_common_subsequence(&chars(a), &chars(b), |x, y| x == y)
            .into_iter()
            .collect()
    }

    #[test]
    fn table_follows_recurrence() {
        let a = chars("ABCBDAB");
        let b = chars("BDCABA");
        let table = LcsTable::build(&a, &b, |x, y| x == y);

        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(3, 0), 0);
        assert_eq!(table.get(2, 1), 1); // "AB" vs "B"
        assert_eq!(table.get(3, 3), 2); // "ABC" vs "BDC"
    }

    #[test]
    fn table_out_of_range_reads_zero() {
        let table = LcsTable::build(&chars("ab"), &chars("ab"), |x, y| x == y);
        assert_eq!(table.get(10, 1), 0);
        assert_eq!(table.get(1, 10), 0);
    }

    #[test]
    fn textbook_example() {
        let common = lcs_string("ABCBDAB", "BDCABA");
        assert_eq!(common.len(), 4);
        assert!(["BCBA", "BDAB", "BCAB"].contains(&common.as_str()));
    }

    #[test]
    fn empty_inputs_give_empty_lcs() {
        assert_eq!(lcs_string("", "abc"), "");
        assert_eq!(lcs_string("abc", ""), "");
        assert_eq!(lcs_string("", ""), "");
    }

    #[test]
    fn disjoint_inputs_give_empty_lcs() {
        assert_eq!(lcs_string("abc", "xyz"), "");
        assert!(LcsTable::build(&chars("abc"), &chars("xyz"), |x, y| x == y).is_empty());
    }

    #[test]
    fn identical_inputs_match_every_position() {
        let pairs = matching_pairs(&chars("hello"), &chars("hello"), |x, y| x == y);
        assert_eq!(pairs.len(), 5);
        assert!(pairs.iter().all(|m| m.pre_index == m.post_index));
    }

    #[test]
    fn duplicates_count_per_position() {
        assert_eq!(lcs_string("aaaa", "aa"), "aa");
        assert_eq!(lcs_string("abab", "baba"), "bab");
    }

    #[test]
    fn long_run_absent_from_other_side() {
        // Every position of the run must be skipped before the trailing match.
        let a = chars("xxxxxxxxxxa");
        let b = chars("a");
        let pairs = matching_pairs(&a, &b, |x, y| x == y);
        assert_eq!(
            pairs,
            vec![Match {
                pre_index: 10,
                post_index: 0
            }]
        );
    }

    #[test]
    fn deletions_between_repeated_elements() {
        let a = chars("abababzzzzab");
        let b = chars("aab");
        let pairs = matching_pairs(&a, &b, |x, y| x == y);
        assert_eq!(pairs.len(), 3);
        for m in &pairs {
            assert_eq!(a[m.pre_index], b[m.post_index]);
        }
    }

    #[test]
    fn backtrack_without_trimming() {
        let a = chars("xay");
        let b = chars("zaw");
        let table = LcsTable::build(&a, &b, |x, y| x == y);
        assert_eq!(
            table.backtrack(),
            vec![Match {
                pre_index: 1,
                post_index: 1
            }]
        );
    }

    #[test]
    fn custom_predicate_is_honored() {
        let a = ["Alpha", "beta", "GAMMA"];
        let b = ["alpha", "BETA", "delta"];
        let common = longest_common_subsequence(&a, &b, |x, y| x.eq_ignore_ascii_case(y));
        // Values come from the second sequence
        assert_eq!(common, vec!["alpha", "BETA"]);
    }

    #[test]
    fn shared_ends_do_not_overlap() {
        let pairs = matching_pairs(&chars("aa"), &chars("aaa"), |x, y| x == y);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.windows(2).all(|w| w[0].post_index < w[1].post_index));
    }

    #[test]
    fn bounded_accepts_small_tables() {
        let pairs =
            bounded_matching_pairs(&chars("abc"), &chars("abd"), |x, y| x == y, Some(4)).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn bounded_rejects_large_tables() {
        let result =
            bounded_matching_pairs(&chars("abcdef"), &chars("uvwxyz"), |x, y| x == y, Some(10));
        assert!(matches!(
            result,
            Err(LcsError::TableTooLarge {
                cells: 49,
                limit: 10
            })
        ));
    }

    #[test]
    fn bounded_limit_ignores_shared_ends() {
        let mut a: Vec<u32> = (0..1000).collect();
        let b = a.clone();
        a[500] = 9999;
        let pairs = bounded_matching_pairs(&a, &b, |x, y| x == y, Some(4)).unwrap();
        assert_eq!(pairs.len(), 999);
    }
}
