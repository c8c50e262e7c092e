/// Error type for sheet submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Not every entry carries a non-blank answer. Holds how many are still
    /// missing; no artifact was produced.
    #[error("осталось ответить: {remaining}")]
    Incomplete { remaining: usize },

    /// The artifact sink failed while saving the export document.
    #[error("failed to save the export: {0}")]
    Sink(#[from] anyhow::Error),
}

impl SubmitError {
    /// Create a sink error from any error type.
    pub fn sink(err: impl Into<anyhow::Error>) -> Self {
        Self::Sink(err.into())
    }

    /// Check whether this is the incomplete-sheet rejection.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_reports_remaining() {
        let err = SubmitError::Incomplete { remaining: 63 };
        assert!(err.is_incomplete());
        assert_eq!(err.to_string(), "осталось ответить: 63");
    }

    #[test]
    fn sink_error_wraps_any_error() {
        let err = SubmitError::sink(std::io::Error::other("disk full"));
        assert!(!err.is_incomplete());
        assert!(err.to_string().contains("disk full"));
    }
}
