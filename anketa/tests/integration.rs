//! Integration tests for the submission flow: completeness validation,
//! export document rendering, and delivery through an artifact sink.

use anketa::{ENTRY_COUNT, EntryIndex, MemorySink, Sheet, SubmitError, document};

fn index(n: usize) -> EntryIndex {
    EntryIndex::new(n).unwrap()
}

fn completed_sheet() -> Sheet {
    let mut sheet = Sheet::new();
    for entry in EntryIndex::all() {
        sheet.set_answer_text(entry, format!("ответ {entry}"));
    }
    sheet
}

#[test]
fn empty_sheet_is_rejected_with_full_count() {
    let sheet = Sheet::new();
    let sink = MemorySink::new();

    let err = sheet.submit(&sink).unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Incomplete {
            remaining: ENTRY_COUNT
        }
    ));
    assert_eq!(sink.saved_count(), 0);
}

#[test]
fn one_missing_answer_is_rejected_with_count_one() {
    let mut sheet = completed_sheet();
    sheet.set_answer_text(index(73), "   ");
    let sink = MemorySink::new();

    let err = sheet.submit(&sink).unwrap_err();
    assert!(matches!(err, SubmitError::Incomplete { remaining: 1 }));
    assert_eq!(sink.saved_count(), 0);
}

#[test]
fn rejection_leaves_the_sheet_unchanged() {
    let mut sheet = Sheet::new();
    sheet.set_question_text(index(10), "Вопрос про погоду");
    sheet.set_answer_text(index(10), "солнечно");
    let before = sheet.clone();

    let sink = MemorySink::new();
    assert!(sheet.submit(&sink).is_err());
    assert_eq!(sheet, before);
}

#[test]
fn complete_sheet_exports_one_artifact() {
    let sheet = completed_sheet();
    let sink = MemorySink::new();

    sheet.submit(&sink).unwrap();

    let saved = sink.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].file_name, "answers.txt");
    assert_eq!(saved[0].file_name, document::EXPORT_FILE_NAME);
}

#[test]
fn exported_document_lists_every_entry_in_order() {
    let sheet = completed_sheet();
    let sink = MemorySink::new();
    sheet.submit(&sink).unwrap();

    let contents = sink.saved()[0].contents.clone();
    let records: Vec<&str> = contents.split("\n\n").collect();
    assert_eq!(records.len(), ENTRY_COUNT);
    assert_eq!(records[0], "1. Вопрос 1\nОтвет: ответ 1");
    assert_eq!(records[99], "100. Вопрос 100\nОтвет: ответ 100");
    assert!(!contents.ends_with('\n'));
}

#[test]
fn typed_question_labels_appear_in_the_export() {
    let mut sheet = completed_sheet();
    sheet.set_question_text(index(2), "Ваш любимый город?");
    sheet.set_answer_text(index(2), "Казань");

    let sink = MemorySink::new();
    sheet.submit(&sink).unwrap();

    let saved = sink.saved();
    assert!(saved[0].contents.contains("2. Ваш любимый город?\nОтвет: Казань"));
}

#[test]
fn unlabelled_questions_fall_back_to_the_placeholder() {
    let mut sheet = completed_sheet();
    sheet.set_answer_text(index(42), "42");

    let sink = MemorySink::new();
    sheet.submit(&sink).unwrap();

    let saved = sink.saved();
    assert!(saved[0].contents.contains("42. Вопрос 42\nОтвет: 42"));
}

#[test]
fn answers_keep_their_whitespace_in_the_export() {
    let mut sheet = completed_sheet();
    sheet.set_answer_text(index(1), "  с отступом  ");

    let sink = MemorySink::new();
    sheet.submit(&sink).unwrap();

    let saved = sink.saved();
    assert!(saved[0].contents.starts_with("1. Вопрос 1\nОтвет:   с отступом  "));
}

#[test]
fn resubmitting_after_filling_the_gap_succeeds() {
    let mut sheet = completed_sheet();
    sheet.set_answer_text(index(50), "");
    let sink = MemorySink::new();

    let err = sheet.submit(&sink).unwrap_err();
    assert!(err.is_incomplete());

    sheet.set_answer_text(index(50), "теперь есть");
    sheet.submit(&sink).unwrap();
    assert_eq!(sink.saved_count(), 1);
}

#[test]
fn sheet_stays_editable_and_resubmittable_after_export() {
    let mut sheet = completed_sheet();
    let sink = MemorySink::new();

    sheet.submit(&sink).unwrap();
    sheet.set_answer_text(index(1), "исправленный ответ");
    sheet.submit(&sink).unwrap();

    let saved = sink.saved();
    assert_eq!(saved.len(), 2);
    assert!(saved[1].contents.contains("1. Вопрос 1\nОтвет: исправленный ответ"));
    assert!(saved[0].contents.contains("1. Вопрос 1\nОтвет: ответ 1"));
}

#[test]
fn emptying_an_answer_after_export_blocks_the_next_submit() {
    let mut sheet = completed_sheet();
    let sink = MemorySink::new();
    sheet.submit(&sink).unwrap();

    sheet.set_answer_text(index(30), " ");
    let err = sheet.submit(&sink).unwrap_err();
    assert!(matches!(err, SubmitError::Incomplete { remaining: 1 }));
    assert_eq!(sink.saved_count(), 1);
}

#[test]
fn sink_failure_surfaces_as_a_sink_error() {
    let sheet = completed_sheet();
    let sink = MemorySink::new().with_failure("нет места");

    let err = sheet.submit(&sink).unwrap_err();
    assert!(!err.is_incomplete());
    assert!(matches!(err, SubmitError::Sink(_)));
    assert!(err.to_string().contains("нет места"));
}

#[test]
fn progress_tracks_the_sheet_through_the_whole_flow() {
    let mut sheet = Sheet::new();
    assert_eq!(sheet.progress().to_string(), "0 / 100");

    for n in 1..=37 {
        sheet.set_answer_text(index(n), "да");
    }
    let progress = sheet.progress();
    assert_eq!(progress.answered(), 37);
    assert_eq!(progress.remaining(), 63);
    assert!(!progress.is_complete());

    for n in 38..=ENTRY_COUNT {
        sheet.set_answer_text(index(n), "да");
    }
    assert!(sheet.progress().is_complete());
}
