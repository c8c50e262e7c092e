//! Terminal form for the questionnaire: a scrollable column with one card
//! per entry, a progress gauge pinned above it, status notices, and a submit
//! button that exports the answers through an artifact sink.

use anketa::{ArtifactSink, ENTRY_COUNT, EntryIndex, Sheet, SubmitError};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the terminal form.
#[derive(Debug, Error)]
pub enum FormError {
    /// User closed the form (pressed Esc) without ever exporting.
    #[error("form closed without exporting the answers")]
    Cancelled,

    /// An I/O error occurred while driving the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact sink failed while saving the export document.
    #[error("export failed: {0}")]
    Export(#[from] SubmitError),
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Contact card shown at the bottom of the form, after the last entry.
#[derive(Debug, Clone)]
pub struct Contact {
    pub heading: String,
    pub note: String,
    pub email: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: "Контактная информация".to_string(),
            note: "После заполнения анкеты отправьте файл с ответами на указанный адрес"
                .to_string(),
            email: "contact@example.com".to_string(),
        }
    }
}

/// Ratatui form that displays all questionnaire entries at once.
///
/// Runs its own event loop in the alternate screen and returns the filled
/// sheet once the user exported at least one answers file and closed the
/// form.
#[derive(Debug, Clone)]
pub struct RatatuiForm {
    /// Title shown at the top of the form.
    title: String,
    /// One-line instruction under the title.
    subtitle: String,
    /// Contact card contents.
    contact: Contact,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiForm {
    /// Create a form with the default title, contact card, and theme.
    pub fn new() -> Self {
        Self {
            title: "Анкета".to_string(),
            subtitle: format!("Ответьте на все {ENTRY_COUNT} вопросов"),
            contact: Contact::default(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the instruction line under the title.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Replace the contact card contents.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, FormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), FormError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the form until the user closes it.
    ///
    /// Submitting with an unanswered entry shows a warning notice and keeps
    /// the form running; a complete sheet is rendered and saved through
    /// `sink` under [`anketa::document::EXPORT_FILE_NAME`], and the form
    /// stays open for further edits and repeated exports. Closing the form
    /// without a single export fails with [`FormError::Cancelled`]. Whatever
    /// fails inside the loop, sink or terminal I/O, the terminal is restored
    /// before the error is returned.
    pub fn run<S: ArtifactSink>(&self, sink: &S) -> Result<Sheet, FormError> {
        let mut terminal = self.setup_terminal()?;
        let mut state = FormState::new(self);

        let outcome = Self::event_loop(&mut terminal, &mut state, sink);
        self.restore_terminal(&mut terminal)?;
        outcome?;

        if state.exports == 0 {
            return Err(FormError::Cancelled);
        }

        Ok(state.sheet)
    }

    fn event_loop<S: ArtifactSink>(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut FormState,
        sink: &S,
    ) -> Result<(), FormError> {
        loop {
            terminal.draw(|frame| draw_form(frame, state))?;

            if let Event::Key(key) = event::read()? {
                if !state.handle_key(sink, key)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Which input currently holds the keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// The editable question label of an entry.
    Question(EntryIndex),
    /// The answer of an entry.
    Answer(EntryIndex),
    /// The submit button under the form.
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Question(index) => Self::Answer(index),
            Self::Answer(index) => match index.next() {
                Some(next) => Self::Question(next),
                None => Self::Submit,
            },
            Self::Submit => Self::Submit,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Question(index) => match index.prev() {
                Some(prev) => Self::Answer(prev),
                None => self,
            },
            Self::Answer(index) => Self::Question(index),
            Self::Submit => Self::Answer(EntryIndex::LAST),
        }
    }

    /// Jump `entries` forward, staying on the same kind of input.
    fn jump_forward(self, entries: usize) -> Self {
        match self {
            Self::Question(index) => Self::Question(index.saturating_add(entries)),
            Self::Answer(index) => Self::Answer(index.saturating_add(entries)),
            Self::Submit => Self::Submit,
        }
    }

    /// Jump `entries` back, staying on the same kind of input.
    fn jump_back(self, entries: usize) -> Self {
        match self {
            Self::Question(index) => Self::Question(index.saturating_sub(entries)),
            Self::Answer(index) => Self::Answer(index.saturating_sub(entries)),
            Self::Submit => Self::Answer(EntryIndex::LAST),
        }
    }

    /// The entry this focus sits on, if it is not the submit button.
    fn entry(self) -> Option<EntryIndex> {
        match self {
            Self::Question(index) | Self::Answer(index) => Some(index),
            Self::Submit => None,
        }
    }
}

/// Kind of a status notice, deciding its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Success,
    Warning,
}

/// Status message shown between the entries and the submit button.
///
/// Stays visible until the next edit or submission replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    kind: NoticeKind,
    title: String,
    body: String,
}

impl Notice {
    fn incomplete(remaining: usize) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: "Не все вопросы заполнены".to_string(),
            body: format!("Осталось ответить: {remaining}"),
        }
    }

    fn exported() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Ответы сохранены".to_string(),
            body: "Файл с ответами загружен на ваше устройство".to_string(),
        }
    }
}

/// State of the form while the event loop runs.
struct FormState {
    sheet: Sheet,
    focus: Focus,
    /// Cursor position inside the focused input, counted in characters.
    cursor: usize,
    /// Scroll offset into the virtual column of cards (vertical, in rows).
    scroll_offset: u16,
    notice: Option<Notice>,
    /// Successful exports so far.
    exports: usize,
    title: String,
    subtitle: String,
    contact: Contact,
    theme: Theme,
}

impl FormState {
    fn new(form: &RatatuiForm) -> Self {
        Self {
            sheet: Sheet::new(),
            focus: Focus::Question(EntryIndex::FIRST),
            cursor: 0,
            scroll_offset: 0,
            notice: None,
            exports: 0,
            title: form.title.clone(),
            subtitle: form.subtitle.clone(),
            contact: form.contact.clone(),
            theme: form.theme.clone(),
        }
    }

    fn focused_text(&self) -> &str {
        match self.focus {
            Focus::Question(index) => self.sheet.question_text(index).unwrap_or_default(),
            Focus::Answer(index) => self.sheet.answer_text(index).unwrap_or_default(),
            Focus::Submit => "",
        }
    }

    fn set_focused_text(&mut self, text: String) {
        match self.focus {
            Focus::Question(index) => self.sheet.set_question_text(index, text),
            Focus::Answer(index) => self.sheet.set_answer_text(index, text),
            Focus::Submit => {}
        }
    }

    fn move_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor = self.focused_text().chars().count();
    }

    fn focus_next(&mut self) {
        self.move_focus(self.focus.next());
    }

    fn focus_prev(&mut self) {
        self.move_focus(self.focus.prev());
    }

    fn jump_forward(&mut self) {
        self.move_focus(self.focus.jump_forward(PAGE_JUMP));
    }

    fn jump_back(&mut self) {
        self.move_focus(self.focus.jump_back(PAGE_JUMP));
    }

    fn insert_char(&mut self, c: char) {
        if self.focus == Focus::Submit {
            return;
        }
        let mut text = self.focused_text().to_string();
        let at = byte_offset(&text, self.cursor);
        text.insert(at, c);
        self.cursor += 1;
        self.set_focused_text(text);
        self.notice = None;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut text = self.focused_text().to_string();
        let start = byte_offset(&text, self.cursor - 1);
        let end = byte_offset(&text, self.cursor);
        text.replace_range(start..end, "");
        self.cursor -= 1;
        self.set_focused_text(text);
        self.notice = None;
    }

    fn delete(&mut self) {
        let mut text = self.focused_text().to_string();
        if self.cursor >= text.chars().count() {
            return;
        }
        let start = byte_offset(&text, self.cursor);
        let end = byte_offset(&text, self.cursor + 1);
        text.replace_range(start..end, "");
        self.set_focused_text(text);
        self.notice = None;
    }

    fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_right(&mut self) {
        if self.cursor < self.focused_text().chars().count() {
            self.cursor += 1;
        }
    }

    fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    fn cursor_end(&mut self) {
        self.cursor = self.focused_text().chars().count();
    }

    /// Submit the sheet, turning the outcome into a notice.
    ///
    /// An incomplete sheet is not an error here: it raises the warning notice
    /// and the form keeps running. Only a failing sink is passed up.
    fn submit<S: ArtifactSink>(&mut self, sink: &S) -> Result<(), SubmitError> {
        match self.sheet.submit(sink) {
            Ok(()) => {
                self.exports += 1;
                self.notice = Some(Notice::exported());
                Ok(())
            }
            Err(SubmitError::Incomplete { remaining }) => {
                self.notice = Some(Notice::incomplete(remaining));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Apply one key event to the form.
    ///
    /// Returns `Ok(false)` once the user asked to close the form. The only
    /// error is a failing sink during submission.
    fn handle_key<S: ArtifactSink>(&mut self, sink: &S, key: KeyEvent) -> Result<bool, FormError> {
        if key.kind != KeyEventKind::Press {
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => return Ok(false),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(false);
            }
            // Ctrl+Enter or F10 submits from anywhere in the form
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(sink)?,
            KeyCode::F(10) => self.submit(sink)?,
            // Enter: submit on the button, otherwise move on
            KeyCode::Enter => {
                if self.focus == Focus::Submit {
                    self.submit(sink)?;
                } else {
                    self.focus_next();
                }
            }
            // Shift+Tab: previous input
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus_prev(),
            // Tab: next input
            KeyCode::Tab => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            KeyCode::Down => self.focus_next(),
            // PageUp/PageDown: jump several entries at once
            KeyCode::PageUp => self.jump_back(),
            KeyCode::PageDown => self.jump_forward(),
            // Left/Right: cursor movement inside the focused input
            KeyCode::Left => self.cursor_left(),
            KeyCode::Right => self.cursor_right(),
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }

        Ok(true)
    }

    /// Keep the focused card fully inside the viewport.
    fn adjust_scroll(&mut self, viewport_height: u16) {
        let (card_top, card_height) = match self.focus.entry() {
            Some(index) => (entry_y(index), ENTRY_CARD_HEIGHT),
            // The submit button is pinned below the viewport; scroll to the
            // contact card so the tail of the column stays visible.
            None => (contact_y(), CONTACT_CARD_HEIGHT),
        };

        if card_top < self.scroll_offset {
            self.scroll_offset = card_top;
        }

        let card_bottom = card_top + card_height;
        if card_bottom > self.scroll_offset + viewport_height {
            self.scroll_offset = card_bottom.saturating_sub(viewport_height);
        }
    }
}

/// Byte offset of the character at `char_idx`, or the text length when the
/// index points past the end.
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Height of one entry card including its borders.
const ENTRY_CARD_HEIGHT: u16 = 4;
/// Blank rows between cards in the column.
const CARD_SPACING: u16 = 1;
/// Height of the contact card at the tail of the column.
const CONTACT_CARD_HEIGHT: u16 = 5;
/// Entries skipped by PageUp/PageDown.
const PAGE_JUMP: usize = 5;

fn entry_y(index: EntryIndex) -> u16 {
    (index.get() as u16 - 1) * (ENTRY_CARD_HEIGHT + CARD_SPACING)
}

fn contact_y() -> u16 {
    ENTRY_COUNT as u16 * (ENTRY_CARD_HEIGHT + CARD_SPACING)
}

fn total_height() -> u16 {
    contact_y() + CONTACT_CARD_HEIGHT
}

fn draw_form(frame: &mut Frame, state: &mut FormState) {
    let area = frame.area();
    let theme = state.theme.clone();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + subtitle
            Constraint::Length(3), // Progress gauge
            Constraint::Min(8),    // Entry cards (scrollable)
            Constraint::Length(2), // Notice
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    // Header
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            state.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.subtitle.clone(),
            Style::default().fg(theme.muted),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, chunks[0]);

    // Progress gauge with the answered counter as its label
    let progress = state.sheet.progress();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Прогресс заполнения "),
        )
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(progress.ratio())
        .label(progress.to_string());
    frame.render_widget(gauge, chunks[1]);

    // Card column - reserve one column for the left margin and one for the
    // scrollbar
    let form_area = chunks[2];
    let content_width = form_area.width.saturating_sub(2);
    let viewport_height = form_area.height;

    state.adjust_scroll(viewport_height);
    let scroll_offset = state.scroll_offset;

    for index in EntryIndex::all() {
        let card_top = entry_y(index);
        let card_bottom = card_top + ENTRY_CARD_HEIGHT;

        // Skip cards entirely above the viewport
        if card_bottom <= scroll_offset {
            continue;
        }
        // Stop once past the bottom edge
        if card_top >= scroll_offset + viewport_height {
            break;
        }
        // Cards sliced open at the top edge are skipped rather than drawn torn
        if card_top < scroll_offset {
            continue;
        }

        let visible_height = ENTRY_CARD_HEIGHT.min(scroll_offset + viewport_height - card_top);
        let card_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + (card_top - scroll_offset),
            width: content_width,
            height: visible_height,
        };
        draw_entry_card(frame, state, index, card_area);
    }

    // Contact card at the tail of the column
    let contact_top = contact_y();
    if contact_top >= scroll_offset && contact_top < scroll_offset + viewport_height {
        let visible_height =
            CONTACT_CARD_HEIGHT.min(scroll_offset + viewport_height - contact_top);
        let card_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + (contact_top - scroll_offset),
            width: content_width,
            height: visible_height,
        };
        draw_contact_card(frame, state, card_area);
    }

    // Scrollbar, the column is always taller than any realistic viewport
    if total_height() > viewport_height {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width - 1,
            y: form_area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total_height() as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Notice
    if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Success => theme.success,
            NoticeKind::Warning => theme.error,
        };
        let notice_text = Paragraph::new(vec![
            Line::from(Span::styled(
                notice.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                notice.body.clone(),
                Style::default().fg(theme.text),
            )),
        ]);
        frame.render_widget(notice_text, chunks[3]);
    }

    // Submit button
    let submit_focused = state.focus == Focus::Submit;
    let submit_style = if submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit_text = if submit_focused {
        "  [ Скачать ответы ]  "
    } else {
        "    Скачать ответы    "
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[4]);

    // Help bar
    let help_text = "Tab: следующее поле  ↑/↓: навигация  Ctrl+Enter: скачать ответы  Esc: выход";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[5]);
}

fn draw_entry_card(frame: &mut Frame, state: &FormState, index: EntryIndex, area: Rect) {
    let theme = &state.theme;
    let question_focused = state.focus == Focus::Question(index);
    let answer_focused = state.focus == Focus::Answer(index);
    let card_focused = question_focused || answer_focused;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if card_focused {
            theme.primary
        } else {
            theme.border
        }))
        .title(format!(" {index} "))
        .title_style(Style::default().fg(if card_focused {
            theme.highlight
        } else {
            theme.muted
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let question_area = Rect { height: 1, ..inner };
    draw_input_row(
        frame,
        question_area,
        state.sheet.question_text(index).unwrap_or_default(),
        &format!("Вопрос {index}"),
        question_focused,
        state.cursor,
        theme,
    );

    if inner.height > 1 {
        let answer_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        draw_input_row(
            frame,
            answer_area,
            state.sheet.answer_text(index).unwrap_or_default(),
            "Введите ваш ответ...",
            answer_focused,
            state.cursor,
            theme,
        );
    }
}

/// Draw one editable line, falling back to the dimmed placeholder when the
/// stored text is empty.
fn draw_input_row(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    cursor: usize,
    theme: &Theme,
) {
    let text = if value.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(theme.muted))
    } else {
        Paragraph::new(value.to_string()).style(Style::default().fg(theme.text))
    };
    frame.render_widget(text, area);

    if is_focused {
        let cursor_x = area.x + cursor as u16;
        if cursor_x < area.x + area.width {
            frame.set_cursor_position((cursor_x, area.y));
        }
    }
}

fn draw_contact_card(frame: &mut Frame, state: &FormState, area: Rect) {
    let theme = &state.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} ", state.contact.heading))
        .title_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let contact_text = Paragraph::new(vec![
        Line::from(Span::styled(
            state.contact.note.clone(),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            state.contact.email.clone(),
            Style::default().fg(theme.primary),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(contact_text, inner);
}
