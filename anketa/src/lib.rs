//! # anketa
//!
//! Core model for a questionnaire of one hundred numbered question/answer
//! entries. The [`Sheet`] stores editable question labels and answers,
//! derives completion [`Progress`] from them, and on submission validates
//! that every entry is answered before rendering the [`document`] and saving
//! it through an [`ArtifactSink`].
//!
//! The crate is deliberately front-end agnostic: user interfaces live in
//! companion crates, and persistence is abstracted behind the sink trait so
//! tests can run against the in-memory [`MemorySink`].
//!
//! ```
//! use anketa::{EntryIndex, MemorySink, Sheet, document};
//!
//! let mut sheet = Sheet::new();
//! sheet.set_question_text(EntryIndex::FIRST, "Как вас зовут?");
//! for index in EntryIndex::all() {
//!     sheet.set_answer_text(index, "есть ответ");
//! }
//!
//! let sink = MemorySink::new();
//! sheet.submit(&sink)?;
//!
//! let saved = sink.saved();
//! assert_eq!(saved[0].file_name, document::EXPORT_FILE_NAME);
//! assert!(saved[0].contents.starts_with("1. Как вас зовут?\nОтвет: есть ответ"));
//! # Ok::<(), anketa::SubmitError>(())
//! ```

mod entry;
pub use entry::{ENTRY_COUNT, EntryIndex};

mod sheet;
pub use sheet::Sheet;

mod progress;
pub use progress::Progress;

pub mod document;

mod sink;
pub use sink::{ArtifactSink, DirectorySink, MemorySink, MemorySinkError, SavedArtifact};

mod error;
pub use error::SubmitError;
