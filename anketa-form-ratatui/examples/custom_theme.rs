//! Questionnaire with a custom warm color theme.
//!
//! The export lands in the current working directory as `answers.txt`, the
//! same way the default binary writes it.

use anketa::{DirectorySink, document};
use anketa_form_ratatui::{Contact, FormError, RatatuiForm, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let warm_theme = Theme {
        primary: Color::Magenta,
        text: Color::White,
        muted: Color::DarkGray,
        highlight: Color::Yellow,
        error: Color::LightRed,
        success: Color::LightGreen,
        border: Color::DarkGray,
    };

    let contact = Contact {
        heading: "Контактная информация".to_string(),
        note: "Заполненный файл отправьте организатору опроса".to_string(),
        email: "opros@example.com".to_string(),
    };

    let form = RatatuiForm::new()
        .with_title("Анкета участника")
        .with_subtitle("Ответьте на все 100 вопросов, затем скачайте файл")
        .with_contact(contact)
        .with_theme(warm_theme);

    let sink = DirectorySink::default();
    match form.run(&sink) {
        Ok(sheet) => {
            let path = sink.target_path(document::EXPORT_FILE_NAME);
            println!("Ответы сохранены в {} ({})", path.display(), sheet.progress());
            Ok(())
        }
        Err(FormError::Cancelled) => {
            println!("Анкета закрыта без экспорта");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
