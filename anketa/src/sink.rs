//! Artifact sinks: where the exported document ends up.
//!
//! Submission only decides *that* an export happens and *what* it contains.
//! Persisting the named artifact is delegated to an [`ArtifactSink`], so the
//! same sheet logic runs against the real filesystem in the application and
//! against an in-memory recorder in tests.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Destination for named text artifacts produced on submission.
pub trait ArtifactSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Persist `contents` under `file_name`.
    fn save(&self, file_name: &str, contents: &str) -> Result<(), Self::Error>;
}

/// Sink that writes artifacts into a directory on the local filesystem.
///
/// An existing file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink that writes into `dir`.
    ///
    /// The directory is expected to exist; it is not created here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path `file_name` would be saved to.
    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl Default for DirectorySink {
    /// A sink writing into the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ArtifactSink for DirectorySink {
    type Error = io::Error;

    fn save(&self, file_name: &str, contents: &str) -> Result<(), Self::Error> {
        fs::write(self.target_path(file_name), contents)
    }
}

/// A single artifact recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub file_name: String,
    pub contents: String,
}

/// Error type for [`MemorySink`].
#[derive(Debug, thiserror::Error)]
pub enum MemorySinkError {
    /// The sink was configured to reject every save.
    #[error("sink rejected '{file_name}': {reason}")]
    Rejected { file_name: String, reason: String },
}

/// Sink that records artifacts in memory instead of touching the filesystem.
///
/// This is the test double for submission flows: assertions run against
/// [`saved`](Self::saved) without any I/O. A sink can also be configured to
/// fail, to exercise error paths.
///
/// ```
/// use anketa::{ArtifactSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.save("answers.txt", "1. Вопрос 1\nОтвет: да").unwrap();
///
/// assert_eq!(sink.saved_count(), 1);
/// assert_eq!(sink.saved()[0].file_name, "answers.txt");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: RefCell<Vec<SavedArtifact>>,
    failure: Option<String>,
}

impl MemorySink {
    /// Create a sink with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every save fail with the given reason.
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// All artifacts saved so far, in save order.
    pub fn saved(&self) -> Vec<SavedArtifact> {
        self.saved.borrow().clone()
    }

    /// Number of artifacts saved so far.
    pub fn saved_count(&self) -> usize {
        self.saved.borrow().len()
    }
}

impl ArtifactSink for MemorySink {
    type Error = MemorySinkError;

    fn save(&self, file_name: &str, contents: &str) -> Result<(), Self::Error> {
        if let Some(reason) = &self.failure {
            return Err(MemorySinkError::Rejected {
                file_name: file_name.to_string(),
                reason: reason.clone(),
            });
        }

        self.saved.borrow_mut().push(SavedArtifact {
            file_name: file_name.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.save("a.txt", "первый").unwrap();
        sink.save("b.txt", "второй").unwrap();

        let saved = sink.saved();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].file_name, "a.txt");
        assert_eq!(saved[0].contents, "первый");
        assert_eq!(saved[1].file_name, "b.txt");
    }

    #[test]
    fn failing_memory_sink_rejects_saves() {
        let sink = MemorySink::new().with_failure("диск переполнен");

        let err = sink.save("answers.txt", "contents").unwrap_err();
        assert_eq!(
            err.to_string(),
            "sink rejected 'answers.txt': диск переполнен"
        );
        assert_eq!(sink.saved_count(), 0);
    }

    #[test]
    fn directory_sink_joins_file_name() {
        let sink = DirectorySink::new("/tmp/export");
        assert_eq!(
            sink.target_path("answers.txt"),
            PathBuf::from("/tmp/export/answers.txt")
        );
    }

    #[test]
    fn directory_sink_writes_and_overwrites() {
        let dir = TempDir::new().unwrap();

        let sink = DirectorySink::new(dir.path());
        sink.save("answers.txt", "первая версия").unwrap();
        sink.save("answers.txt", "вторая версия").unwrap();

        let on_disk = fs::read_to_string(dir.path().join("answers.txt")).unwrap();
        assert_eq!(on_disk, "вторая версия");
    }
}
