use anketa::{DirectorySink, document};
use anketa_form_ratatui::{FormError, RatatuiForm};

fn main() -> anyhow::Result<()> {
    let sink = DirectorySink::default();
    let form = RatatuiForm::new();

    match form.run(&sink) {
        Ok(sheet) => {
            let path = sink.target_path(document::EXPORT_FILE_NAME);
            println!("Ответы сохранены в {} ({})", path.display(), sheet.progress());
            Ok(())
        }
        Err(FormError::Cancelled) => {
            println!("Анкета закрыта без экспорта.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
