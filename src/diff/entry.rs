/// An element present only in the modified sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition<T> {
    pub value: T,
    /// Position in the modified sequence
    pub index: usize,
}

/// An element present only in the original sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion<T> {
    pub value: T,
    /// Position in the original sequence
    pub index: usize,
}

/// An element matched in both sequences.
///
/// Side lists carry only the index of their own sequence; unified entries
/// carry both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoChange<T> {
    pub value: T,
    /// Position in the original sequence
    pub pre_index: Option<usize>,
    /// Position in the modified sequence
    pub post_index: Option<usize>,
}

/// One classified element of a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry<T> {
    Addition(Addition<T>),
    Deletion(Deletion<T>),
    NoChange(NoChange<T>),
}

impl<T> DiffEntry<T> {
    /// The element this entry classifies
    pub fn value(&self) -> &T {
        match self {
            DiffEntry::Addition(a) => &a.value,
            DiffEntry::Deletion(d) => &d.value,
            DiffEntry::NoChange(n) => &n.value,
        }
    }

    /// Position in the original sequence, if the element exists there
    pub fn pre_index(&self) -> Option<usize> {
        match self {
            DiffEntry::Addition(_) => None,
            DiffEntry::Deletion(d) => Some(d.index),
            DiffEntry::NoChange(n) => n.pre_index,
        }
    }

    /// Position in the modified sequence, if the element exists there
    pub fn post_index(&self) -> Option<usize> {
        match self {
            DiffEntry::Addition(a) => Some(a.index),
            DiffEntry::Deletion(_) => None,
            DiffEntry::NoChange(n) => n.post_index,
        }
    }

    pub fn is_addition(&self) -> bool {
        matches!(self, DiffEntry::Addition(_))
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, DiffEntry::Deletion(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffEntry::NoChange(_))
    }
}

impl<T> From<Addition<T>> for DiffEntry<T> {
    fn from(addition: Addition<T>) -> Self {
        DiffEntry::Addition(addition)
    }
}

impl<T> From<Deletion<T>> for DiffEntry<T> {
    fn from(deletion: Deletion<T>) -> Self {
        DiffEntry::Deletion(deletion)
    }
}

impl<T> From<NoChange<T>> for DiffEntry<T> {
    fn from(no_change: NoChange<T>) -> Self {
        DiffEntry::NoChange(no_change)
    }
}
