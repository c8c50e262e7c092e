use std::fmt;

/// Completion state derived from a sheet: how many of its entries carry a
/// non-blank answer.
///
/// Values are produced by [`Sheet::progress`](crate::Sheet::progress) and
/// never stored, so the numbers cannot drift from the answers they describe.
/// [`fmt::Display`] prints the counter shown next to the progress bar,
/// `"{answered} / {total}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    answered: usize,
    total: usize,
}

impl Progress {
    pub(crate) fn new(answered: usize, total: usize) -> Self {
        Self { answered, total }
    }

    /// Entries that carry a non-blank answer.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Total number of entries on the sheet.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries still waiting for an answer.
    pub fn remaining(&self) -> usize {
        self.total - self.answered
    }

    /// Whether every entry has been answered.
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// Completion as a fraction in `0.0..=1.0`, for rendering a bar.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.answered, self.total)
    }
}
