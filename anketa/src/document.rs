//! Renders the plain-text document exported on submission.
//!
//! The document lists every entry in ascending order, one record per entry,
//! records separated by a single blank line:
//!
//! ```text
//! 1. Вопрос 1
//! Ответ: синий
//!
//! 2. Как вас зовут?
//! Ответ: Анна
//! ```
//!
//! Question labels fall back to the generated `Вопрос {index}` placeholder,
//! answers are reproduced exactly as typed.

use crate::{EntryIndex, Sheet};

/// Fixed file name of the exported document.
pub const EXPORT_FILE_NAME: &str = "answers.txt";

/// The question label shown for an entry: the stored text, or the generated
/// `Вопрос {index}` placeholder when no label was entered.
///
/// The placeholder steps in only for a missing or empty label. Labels
/// consisting of whitespace were still typed by the user and are kept
/// verbatim.
pub fn question_label(sheet: &Sheet, index: EntryIndex) -> String {
    match sheet.question_text(index) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => format!("Вопрос {index}"),
    }
}

/// Render the full export document for `sheet`.
///
/// Every entry produces a record regardless of its content; there is no
/// trailing newline after the last record.
pub fn render(sheet: &Sheet) -> String {
    let records: Vec<String> = EntryIndex::all()
        .map(|index| render_record(sheet, index))
        .collect();
    records.join("\n\n")
}

fn render_record(sheet: &Sheet, index: EntryIndex) -> String {
    let question = question_label(sheet, index);
    let answer = sheet.answer_text(index).unwrap_or_default();
    format!("{index}. {question}\nОтвет: {answer}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_for_missing_label() {
        let sheet = Sheet::new();
        let index = EntryIndex::new(42).unwrap();
        assert_eq!(question_label(&sheet, index), "Вопрос 42");
    }

    #[test]
    fn placeholder_for_empty_label() {
        let mut sheet = Sheet::new();
        let index = EntryIndex::new(5).unwrap();
        sheet.set_question_text(index, "");
        assert_eq!(question_label(&sheet, index), "Вопрос 5");
    }

    #[test]
    fn whitespace_label_is_kept() {
        let mut sheet = Sheet::new();
        let index = EntryIndex::new(5).unwrap();
        sheet.set_question_text(index, "   ");
        assert_eq!(question_label(&sheet, index), "   ");
    }

    #[test]
    fn typed_label_wins_over_placeholder() {
        let mut sheet = Sheet::new();
        let index = EntryIndex::FIRST;
        sheet.set_question_text(index, "Как вас зовут?");
        assert_eq!(question_label(&sheet, index), "Как вас зовут?");
    }

    #[test]
    fn renders_one_record_per_entry() {
        let sheet = Sheet::new();
        let document = render(&sheet);

        let records: Vec<&str> = document.split("\n\n").collect();
        assert_eq!(records.len(), crate::ENTRY_COUNT);
        assert_eq!(records[0], "1. Вопрос 1\nОтвет: ");
        assert_eq!(records[99], "100. Вопрос 100\nОтвет: ");
    }

    #[test]
    fn no_trailing_newline() {
        let sheet = Sheet::new();
        assert!(!render(&sheet).ends_with('\n'));
    }

    #[test]
    fn record_combines_label_and_verbatim_answer() {
        let mut sheet = Sheet::new();
        let index = EntryIndex::new(42).unwrap();
        sheet.set_answer_text(index, "42");

        let document = render(&sheet);
        assert!(document.contains("42. Вопрос 42\nОтвет: 42"));
    }

    #[test]
    fn answers_are_not_trimmed_in_the_document() {
        let mut sheet = Sheet::new();
        let index = EntryIndex::FIRST;
        sheet.set_question_text(index, "Любимый цвет?");
        sheet.set_answer_text(index, "  синий  ");

        let document = render(&sheet);
        assert!(document.starts_with("1. Любимый цвет?\nОтвет:   синий  "));
    }
}
