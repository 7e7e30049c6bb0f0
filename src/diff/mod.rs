//! Classification of two sequences into additions, deletions and unchanged
//! elements.
//!
//! A [`Diff`] is computed eagerly from the original and modified sequences and
//! exposes three aligned views:
//!
//! - [`Diff::left`]: the original sequence, each element either deleted or
//!   unchanged, with additions spliced in where they do not collide with a
//!   deletion.
//! - [`Diff::right`]: the modified sequence, symmetric to `left`.
//! - [`Diff::unified`]: one patch-ordered list where deletions come before the
//!   additions that replace them.
//!
//! # Examples
//!
//! ```
//! use kindling::diff::{Addition, Diff, DiffEntry, NoChange};
//!
//! let diff = Diff::new(&["a", "b"], &["a", "x", "b"]);
//!
//! assert_eq!(diff.additions(), &[Addition { value: "x", index: 1 }]);
//! assert!(diff.deletions().is_empty());
//! assert_eq!(diff.unified()[1], DiffEntry::Addition(Addition { value: "x", index: 1 }));
//! assert_eq!(
//!     diff.unified()[2],
//!     DiffEntry::NoChange(NoChange { value: "b", pre_index: Some(1), post_index: Some(2) })
//! );
//! ```

mod entry;
mod merge;

pub use entry::{Addition, Deletion, DiffEntry, NoChange};

use crate::lcs::{self, LcsError, Match};

/// The classified difference between two sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<T> {
    additions: Vec<Addition<T>>,
    deletions: Vec<Deletion<T>>,
    left: Vec<DiffEntry<T>>,
    right: Vec<DiffEntry<T>>,
    unified: Vec<DiffEntry<T>>,
    common_len: usize,
}

impl<T: Clone + PartialEq> Diff<T> {
    /// Diff two sequences using value equality.
    pub fn new(original: &[T], modified: &[T]) -> Self {
        Self::with_equality(original, modified, |a, b| a == b)
    }
}

impl<T: Clone> Diff<T> {
    /// Diff two sequences using a custom equality predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use kindling::diff::Diff;
    ///
    /// let diff = Diff::with_equality(&["Alpha", "beta"], &["alpha", "BETA"], |a, b| {
    ///     a.eq_ignore_ascii_case(b)
    /// });
    /// assert!(diff.is_identical());
    /// ```
    pub fn with_equality<F>(original: &[T], modified: &[T], eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let matches = lcs::matching_pairs(original, modified, eq);
        Self::from_matches(original, modified, &matches)
    }

    /// Diff two sequences, refusing to build an LCS table larger than `limit`
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns [`LcsError::TableTooLarge`] when the differing part of the
    /// inputs needs more than `limit` table cells.
    pub fn try_with_equality<F>(
        original: &[T],
        modified: &[T],
        eq: F,
        limit: Option<usize>,
    ) -> Result<Self, LcsError>
    where
        F: Fn(&T, &T) -> bool,
    {
        let matches = lcs::bounded_matching_pairs(original, modified, eq, limit)?;
        Ok(Self::from_matches(original, modified, &matches))
    }

    /// Build the diff from precomputed LCS positions.
    ///
    /// `matches` must be strictly increasing on both sides and in range for
    /// both sequences, as returned by [`lcs::matching_pairs`]. Pairs that are
    /// out of range are ignored.
    pub fn from_matches(original: &[T], modified: &[T], matches: &[Match]) -> Self {
        let mut pre_matched = vec![false; original.len()];
        let mut post_matched = vec![false; modified.len()];
        let mut common_len = 0;
        for m in matches {
            if m.pre_index < original.len() && m.post_index < modified.len() {
                pre_matched[m.pre_index] = true;
                post_matched[m.post_index] = true;
                common_len += 1;
            }
        }

        let deletions: Vec<Deletion<T>> = original
            .iter()
            .enumerate()
            .filter(|(i, _)| !pre_matched[*i])
            .map(|(index, value)| Deletion {
                value: value.clone(),
                index,
            })
            .collect();

        let additions: Vec<Addition<T>> = modified
            .iter()
            .enumerate()
            .filter(|(i, _)| !post_matched[*i])
            .map(|(index, value)| Addition {
                value: value.clone(),
                index,
            })
            .collect();

        let mut left: Vec<DiffEntry<T>> = original
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if pre_matched[index] {
                    DiffEntry::NoChange(NoChange {
                        value: value.clone(),
                        pre_index: Some(index),
                        post_index: None,
                    })
                } else {
                    DiffEntry::Deletion(Deletion {
                        value: value.clone(),
                        index,
                    })
                }
            })
            .collect();
        merge::splice(
            &mut left,
            additions.iter().map(|a| (a.index, DiffEntry::from(a.clone()))),
            DiffEntry::is_deletion,
        );

        let mut right: Vec<DiffEntry<T>> = modified
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if post_matched[index] {
                    DiffEntry::NoChange(NoChange {
                        value: value.clone(),
                        pre_index: None,
                        post_index: Some(index),
                    })
                } else {
                    DiffEntry::Addition(Addition {
                        value: value.clone(),
                        index,
                    })
                }
            })
            .collect();
        merge::splice(
            &mut right,
            deletions.iter().map(|d| (d.index, DiffEntry::from(d.clone()))),
            DiffEntry::is_addition,
        );

        let unified = merge::unify(&left, &right);

        tracing::debug!(
            original = original.len(),
            modified = modified.len(),
            common = common_len,
            additions = additions.len(),
            deletions = deletions.len(),
            "computed diff"
        );

        Diff {
            additions,
            deletions,
            left,
            right,
            unified,
            common_len,
        }
    }
}

impl<T> Diff<T> {
    /// Elements only in the modified sequence, in order.
    pub fn additions(&self) -> &[Addition<T>] {
        &self.additions
    }

    /// Elements only in the original sequence, in order.
    pub fn deletions(&self) -> &[Deletion<T>] {
        &self.deletions
    }

    /// Original-side view with additions spliced in.
    pub fn left(&self) -> &[DiffEntry<T>] {
        &self.left
    }

    /// Modified-side view with deletions spliced in.
    pub fn right(&self) -> &[DiffEntry<T>] {
        &self.right
    }

    /// Patch-ordered merge of both sides.
    pub fn unified(&self) -> &[DiffEntry<T>] {
        &self.unified
    }

    /// Length of the longest common subsequence.
    pub fn common_len(&self) -> usize {
        self.common_len
    }

    /// True when neither side has a change.
    pub fn is_identical(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn kept(value: &str, pre: usize, post: usize) -> DiffEntry<&str> {
        DiffEntry::NoChange(NoChange {
            value,
            pre_index: Some(pre),
            post_index: Some(post),
        })
    }

    fn added(value: &str, index: usize) -> DiffEntry<&str> {
        DiffEntry::Addition(Addition { value, index })
    }

    fn deleted(value: &str, index: usize) -> DiffEntry<&str> {
        DiffEntry::Deletion(Deletion { value, index })
    }

    fn left_kept(value: &str, pre: usize) -> DiffEntry<&str> {
        DiffEntry::NoChange(NoChange {
            value,
            pre_index: Some(pre),
            post_index: None,
        })
    }

    fn right_kept(value: &str, post: usize) -> DiffEntry<&str> {
        DiffEntry::NoChange(NoChange {
            value,
            pre_index: None,
            post_index: Some(post),
        })
    }

    #[test]
    fn pure_addition() {
        let diff = Diff::new(&["a", "b"], &["a", "x", "b"]);

        assert_eq!(diff.common_len(), 2);
        assert_eq!(diff.additions(), &[Addition { value: "x", index: 1 }]);
        assert!(diff.deletions().is_empty());
        assert_eq!(
            diff.unified(),
            &[kept("a", 0, 0), added("x", 1), kept("b", 1, 2)]
        );
        assert_eq!(
            diff.left(),
            &[left_kept("a", 0), added("x", 1), left_kept("b", 1)]
        );
        assert_eq!(
            diff.right(),
            &[right_kept("a", 0), added("x", 1), right_kept("b", 2)]
        );
    }

    #[test]
    fn pure_deletion() {
        let diff = Diff::new(&["a", "b", "c"], &["a", "c"]);

        assert!(diff.additions().is_empty());
        assert_eq!(diff.deletions(), &[Deletion { value: "b", index: 1 }]);
        assert_eq!(
            diff.unified(),
            &[kept("a", 0, 0), deleted("b", 1), kept("c", 2, 1)]
        );
        assert_eq!(
            diff.right(),
            &[right_kept("a", 0), deleted("b", 1), right_kept("c", 1)]
        );
    }

    #[test]
    fn total_replacement() {
        let diff = Diff::new(&["a"], &["b"]);

        assert_eq!(diff.common_len(), 0);
        assert_eq!(diff.unified(), &[deleted("a", 0), added("b", 0)]);
        // The addition collides with the deletion in slot 0 and is not spliced
        assert_eq!(diff.left(), &[deleted("a", 0)]);
        assert_eq!(diff.right(), &[added("b", 0)]);
    }

    #[test]
    fn empty_original() {
        let diff = Diff::new(&[], &["a"]);

        assert!(diff.deletions().is_empty());
        assert_eq!(diff.additions(), &[Addition { value: "a", index: 0 }]);
        assert_eq!(diff.unified(), &[added("a", 0)]);
        assert_eq!(diff.left(), &[added("a", 0)]);
    }

    #[test]
    fn empty_both() {
        let diff: Diff<&str> = Diff::new(&[], &[]);

        assert!(diff.is_identical());
        assert!(diff.unified().is_empty());
        assert!(diff.left().is_empty());
        assert!(diff.right().is_empty());
    }

    #[test]
    fn identical_sequences() {
        let lines = ["one", "two", "two", "three"];
        let diff = Diff::new(&lines, &lines);

        assert!(diff.is_identical());
        assert_eq!(
            diff.unified(),
            &[
                kept("one", 0, 0),
                kept("two", 1, 1),
                kept("two", 2, 2),
                kept("three", 3, 3),
            ]
        );
    }

    #[test]
    fn no_overlap_lists_deletions_then_additions() {
        let diff = Diff::new(&["a", "b"], &["x", "y", "z"]);

        assert_eq!(
            diff.unified(),
            &[
                deleted("a", 0),
                deleted("b", 1),
                added("x", 0),
                added("y", 1),
                added("z", 2),
            ]
        );
        // Slots 0 and 1 hold deletions, slot 2 is past the end
        assert_eq!(diff.left(), &[deleted("a", 0), deleted("b", 1), added("z", 2)]);
    }

    #[test]
    fn replacement_inside_common_context() {
        let original = ["fn main() {", "    old();", "}"];
        let modified = ["fn main() {", "    new();", "    more();", "}"];
        let diff = Diff::new(&original, &modified);

        assert_eq!(
            diff.unified(),
            &[
                kept("fn main() {", 0, 0),
                deleted("    old();", 1),
                added("    new();", 1),
                added("    more();", 2),
                kept("}", 2, 3),
            ]
        );
    }

    #[test]
    fn repeated_lines_respect_multiplicity() {
        let diff = Diff::new(&["x", "x", "x"], &["x"]);

        assert_eq!(diff.common_len(), 1);
        assert_eq!(diff.deletions().len(), 2);
        assert!(diff.additions().is_empty());
        assert_eq!(diff.unified().len(), 3);
    }

    #[test]
    fn custom_equality_keeps_original_values() {
        let diff = Diff::with_equality(&["Hello", "World"], &["hello", "there"], |a, b| {
            a.eq_ignore_ascii_case(b)
        });

        assert_eq!(diff.common_len(), 1);
        assert_eq!(diff.unified()[0], kept("Hello", 0, 0));
        assert_eq!(diff.right()[0], right_kept("hello", 0));
    }

    #[test]
    fn limit_is_enforced() {
        let result = Diff::try_with_equality(&["a", "b"], &["c", "d"], |a, b| a == b, Some(3));
        assert!(matches!(result, Err(LcsError::TableTooLarge { cells: 9, .. })));

        let diff = Diff::try_with_equality(&["a", "b"], &["c", "d"], |a, b| a == b, None).unwrap();
        assert_eq!(diff.unified().len(), 4);
    }

    #[test]
    fn from_matches_ignores_out_of_range_pairs() {
        let matches = [
            Match {
                pre_index: 0,
                post_index: 0,
            },
            Match {
                pre_index: 7,
                post_index: 7,
            },
        ];
        let diff = Diff::from_matches(&["a", "b"], &["a", "c"], &matches);

        assert_eq!(diff.common_len(), 1);
        assert_eq!(
            diff.unified(),
            &[kept("a", 0, 0), deleted("b", 1), added("c", 1)]
        );
    }
}
