use std::collections::HashMap;

use crate::{ArtifactSink, ENTRY_COUNT, EntryIndex, Progress, SubmitError, document};

/// The filled-in state of the questionnaire.
///
/// A sheet holds two independent mappings keyed by [`EntryIndex`]: the
/// editable question labels and the answers. Both start empty and accept any
/// text, including blank text, so the stored state always reflects exactly
/// what was typed. Whether an entry counts as answered is decided at read
/// time by [`is_answered`](Self::is_answered), and the `Вопрос {index}`
/// placeholder for unlabelled questions is resolved at render time by the
/// [`document`] module, never written back into the sheet.
///
/// ```
/// use anketa::{EntryIndex, Sheet};
///
/// let mut sheet = Sheet::new();
/// let first = EntryIndex::FIRST;
///
/// sheet.set_answer_text(first, "  ");
/// assert!(!sheet.is_answered(first));
///
/// sheet.set_answer_text(first, "синий");
/// assert!(sheet.is_answered(first));
/// assert_eq!(sheet.progress().answered(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    questions: HashMap<EntryIndex, String>,
    answers: HashMap<EntryIndex, String>,
}

impl Sheet {
    /// Create a sheet with no question labels and no answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the question label for `index`.
    pub fn set_question_text(&mut self, index: EntryIndex, text: impl Into<String>) {
        self.questions.insert(index, text.into());
    }

    /// Record or overwrite the answer for `index`.
    pub fn set_answer_text(&mut self, index: EntryIndex, text: impl Into<String>) {
        self.answers.insert(index, text.into());
    }

    /// The question label for `index`, if one was ever entered.
    pub fn question_text(&self, index: EntryIndex) -> Option<&str> {
        self.questions.get(&index).map(String::as_str)
    }

    /// The answer for `index`, if one was ever entered.
    pub fn answer_text(&self, index: EntryIndex) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Whether `index` counts as answered: its answer is non-empty after
    /// trimming whitespace.
    pub fn is_answered(&self, index: EntryIndex) -> bool {
        self.answer_text(index)
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// Completion progress over all entries.
    ///
    /// Recomputed from the answers on every call; the same sheet state always
    /// yields the same progress.
    pub fn progress(&self) -> Progress {
        let answered = self
            .answers
            .values()
            .filter(|text| !text.trim().is_empty())
            .count();
        Progress::new(answered, ENTRY_COUNT)
    }

    /// Validate the sheet and, if complete, export the answers.
    ///
    /// The sheet must have every entry answered; otherwise this fails with
    /// [`SubmitError::Incomplete`] carrying the number of entries still
    /// missing, and nothing reaches the sink. On success the rendered
    /// document is saved through `sink` under
    /// [`document::EXPORT_FILE_NAME`].
    ///
    /// The sheet itself is never modified, so it can keep being edited and
    /// submitted again, each attempt validated afresh.
    pub fn submit<S: ArtifactSink>(&self, sink: &S) -> Result<(), SubmitError> {
        let progress = self.progress();
        if !progress.is_complete() {
            return Err(SubmitError::Incomplete {
                remaining: progress.remaining(),
            });
        }

        let contents = document::render(self);
        sink.save(document::EXPORT_FILE_NAME, &contents)
            .map_err(SubmitError::sink)?;
        Ok(())
    }
}
