//! # anketa-form-ratatui
//!
//! Terminal front end for the `anketa` questionnaire.
//!
//! The form shows all one hundred entries at once in a scrollable column,
//! one bordered card per entry with the editable question label on top and
//! the answer below it. A progress gauge tracks how many entries are
//! answered, and the submit button validates the sheet before exporting it
//! through an [`anketa::ArtifactSink`]. Navigation follows the usual TUI
//! conventions: Tab/Shift+Tab and arrow keys move between inputs,
//! PageUp/PageDown jump several entries, Ctrl+Enter exports from anywhere.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use anketa::DirectorySink;
//! use anketa_form_ratatui::RatatuiForm;
//!
//! fn main() -> anyhow::Result<()> {
//!     let sink = DirectorySink::default();
//!     let sheet = RatatuiForm::new().run(&sink)?;
//!     println!("Заполнено: {}", sheet.progress());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{Contact, FormError, RatatuiForm, Theme};
