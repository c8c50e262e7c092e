use std::fmt;

/// Number of question/answer entries on the sheet.
pub const ENTRY_COUNT: usize = 100;

/// One-based index of a question/answer entry, guaranteed to lie within
/// `1..=ENTRY_COUNT`.
///
/// The index doubles as the entry's visible number: it appears in the badge
/// next to each card, in the generated question placeholder, and as the
/// record number in the export document. [`fmt::Display`] prints the plain
/// number.
///
/// ```
/// use anketa::EntryIndex;
///
/// let index = EntryIndex::new(42).unwrap();
/// assert_eq!(index.to_string(), "42");
/// assert!(EntryIndex::new(0).is_none());
/// assert!(EntryIndex::new(101).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryIndex(usize);

impl EntryIndex {
    /// The first entry on the sheet.
    pub const FIRST: Self = Self(1);

    /// The last entry on the sheet.
    pub const LAST: Self = Self(ENTRY_COUNT);

    /// Create an index, if `index` lies within `1..=ENTRY_COUNT`.
    pub fn new(index: usize) -> Option<Self> {
        (1..=ENTRY_COUNT).contains(&index).then_some(Self(index))
    }

    /// The underlying one-based number.
    pub fn get(&self) -> usize {
        self.0
    }

    /// All indices in ascending order, `1` through `ENTRY_COUNT`.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=ENTRY_COUNT).map(Self)
    }

    /// The following index, unless this is the last entry.
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// The preceding index, unless this is the first entry.
    pub fn prev(&self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    /// Advance by `steps` entries, stopping at the last one.
    pub fn saturating_add(&self, steps: usize) -> Self {
        Self(self.0.saturating_add(steps).min(ENTRY_COUNT))
    }

    /// Go back by `steps` entries, stopping at the first one.
    pub fn saturating_sub(&self, steps: usize) -> Self {
        Self(self.0.saturating_sub(steps).max(1))
    }
}

impl fmt::Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
