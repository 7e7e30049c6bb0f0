use super::entry::{DiffEntry, NoChange};

/// Splice entries from the other side into a per-side list.
///
/// Each foreign entry lands at its recorded index unless the slot there
/// already holds one of this side's own changes. Indices past the end append.
pub(super) fn splice<T, I>(
    list: &mut Vec<DiffEntry<T>>,
    foreign: I,
    occupied: fn(&DiffEntry<T>) -> bool,
) where
    I: IntoIterator<Item = (usize, DiffEntry<T>)>,
{
    for (index, entry) in foreign {
        if list.get(index).is_some_and(occupied) {
            continue;
        }
        list.insert(index.min(list.len()), entry);
    }
}

/// Merge the left and right lists into a single patch-ordered list.
///
/// Additions on the left walk and deletions on the right walk are skipped,
/// they are picked up from the other side. Matched pairs collapse into one
/// entry carrying both indices, and the value of the original side.
pub(super) fn unify<T: Clone>(left: &[DiffEntry<T>], right: &[DiffEntry<T>]) -> Vec<DiffEntry<T>> {
    let mut pre = left.iter().filter(|e| !e.is_addition()).peekable();
    let mut post = right.iter().filter(|e| !e.is_deletion()).peekable();
    let mut unified = Vec::with_capacity(left.len().max(right.len()));

    loop {
        match (pre.peek(), post.peek()) {
            (None, None) => break,
            (Some(DiffEntry::NoChange(l)), Some(DiffEntry::NoChange(r))) => {
                unified.push(DiffEntry::NoChange(NoChange {
                    value: l.value.clone(),
                    pre_index: l.pre_index,
                    post_index: r.post_index,
                }));
                pre.next();
                post.next();
            }
            (Some(entry @ DiffEntry::Deletion(_)), _) => {
                unified.push((*entry).clone());
                pre.next();
            }
            (_, Some(entry @ DiffEntry::Addition(_))) => {
                unified.push((*entry).clone());
                post.next();
            }
            // Sides disagree on the match count; emit leftovers as-is.
            (Some(entry), _) => {
                unified.push((*entry).clone());
                pre.next();
            }
            (None, Some(entry)) => {
                unified.push((*entry).clone());
                post.next();
            }
        }
    }

    unified
}
