//! Question authoring: a form that appends to the store, plus direct
//! access to the raw store text.

mod draft;
mod editor;

pub use draft::Draft;
pub use editor::TextBuffer;

use tracing::info;

use crate::codec;
use crate::error::QuizError;
use crate::models::{OptionKey, Question};
use crate::storage::Storage;

/// Which screen the author is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorView {
    Form,
    Raw,
    ConfirmClear,
}

/// Focused form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Prompt,
    Option(OptionKey),
    Correct,
}

impl FormFocus {
    const ORDER: [FormFocus; 6] = [
        FormFocus::Prompt,
        FormFocus::Option(OptionKey::A),
        FormFocus::Option(OptionKey::B),
        FormFocus::Option(OptionKey::C),
        FormFocus::Option(OptionKey::D),
        FormFocus::Correct,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct AuthorApp<S: Storage> {
    pub view: AuthorView,
    storage: S,
    draft: Draft,
    focus: FormFocus,
    editor: Option<TextBuffer>,
    notice: Option<Notice>,
    record_count: usize,
}

impl<S: Storage> AuthorApp<S> {
    pub fn new(storage: S) -> Result<Self, QuizError> {
        let record_count = storage.count_records()?;
        Ok(Self {
            view: AuthorView::Form,
            storage,
            draft: Draft::new(),
            focus: FormFocus::Prompt,
            editor: None,
            notice: None,
            record_count,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn editor(&self) -> Option<&TextBuffer> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TextBuffer> {
        self.editor.as_mut()
    }

    fn info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Info(message.into()));
    }

    fn error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    fn refresh_count(&mut self) {
        match self.storage.count_records() {
            Ok(count) => self.record_count = count,
            Err(err) => self.error(err.to_string()),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type into the focused field. On the answer selector, `a`..`d` pick
    /// the option.
    pub fn type_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Prompt => self.draft.prompt.push(c),
            FormFocus::Option(key) => self.draft.option_mut(key).push(c),
            FormFocus::Correct => {
                let key = match c.to_ascii_lowercase() {
                    'a' => OptionKey::A,
                    'b' => OptionKey::B,
                    'c' => OptionKey::C,
                    'd' => OptionKey::D,
                    _ => return,
                };
                self.draft.correct = Some(key);
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormFocus::Prompt => {
                self.draft.prompt.pop();
            }
            FormFocus::Option(key) => {
                self.draft.option_mut(key).pop();
            }
            FormFocus::Correct => self.draft.correct = None,
        }
    }

    /// Step the answer selection through the options.
    pub fn cycle_correct(&mut self, forward: bool) {
        let next = match (self.draft.correct, forward) {
            (None, true) => 0,
            (None, false) => 3,
            (Some(key), true) => (key.index() + 1) % 4,
            (Some(key), false) => (key.index() + 3) % 4,
        };
        self.draft.correct = OptionKey::from_index(next);
    }

    /// Validate the form and append it to the store.
    ///
    /// Nothing is written if a field is missing; the form is kept so the
    /// author can fix it.
    pub fn save_draft(&mut self) -> Result<Question, QuizError> {
        let question = match self.draft.to_question() {
            Ok(question) => question,
            Err(err) => {
                self.error(err.to_string());
                return Err(err.into());
            }
        };

        let mut block = codec::encode(&question);
        let existing = match self.storage.read() {
            Ok(text) => text,
            Err(err) => {
                self.error(err.to_string());
                return Err(err.into());
            }
        };
        // Each block has to start on its own line.
        if !existing.is_empty() && !existing.ends_with('\n') {
            block.insert(0, '\n');
        }

        if let Err(err) = self.storage.append(&block) {
            self.error(err.to_string());
            return Err(err.into());
        }

        info!(prompt = question.prompt(), "saved question");
        self.draft.clear();
        self.focus = FormFocus::Prompt;
        self.refresh_count();
        self.info("Question saved.");
        Ok(question)
    }

    pub fn open_raw(&mut self) {
        match self.storage.read() {
            Ok(text) => {
                self.editor = Some(TextBuffer::from_text(&text));
                self.view = AuthorView::Raw;
                self.notice = None;
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    /// Replace the store with the edited text.
    pub fn save_raw(&mut self) -> Result<(), QuizError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(());
        };
        let text = editor.text();

        if let Err(err) = self.storage.overwrite(&text) {
            self.error(err.to_string());
            return Err(err.into());
        }
        editor.mark_saved();

        let decoded = codec::decode_all(&text);
        self.refresh_count();
        match decoded.warning_count() {
            0 => self.info(format!("Saved. {} questions.", decoded.questions.len())),
            skipped => self.error(format!(
                "Saved. {} questions, {} malformed blocks will be skipped.",
                decoded.questions.len(),
                skipped
            )),
        }
        Ok(())
    }

    /// Leave the raw view, dropping unsaved edits.
    pub fn close_raw(&mut self) {
        let discarded = self.editor.take().is_some_and(|editor| editor.is_dirty());
        self.view = AuthorView::Form;
        if discarded {
            self.info("Unsaved raw edits discarded.");
        }
    }

    pub fn request_clear(&mut self) {
        self.view = AuthorView::ConfirmClear;
    }

    pub fn cancel_clear(&mut self) {
        self.view = AuthorView::Form;
    }

    pub fn confirm_clear(&mut self) -> Result<(), QuizError> {
        self.view = AuthorView::Form;
        if let Err(err) = self.storage.truncate() {
            self.error(err.to_string());
            return Err(err.into());
        }
        self.refresh_count();
        self.info("All questions deleted.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn type_str<S: Storage>(app: &mut AuthorApp<S>, text: &str) {
        for c in text.chars() {
            app.type_char(c);
        }
    }

    fn fill_form<S: Storage>(app: &mut AuthorApp<S>) {
        type_str(app, "2+2?");
        for value in ["3", "4", "5", "22"] {
            app.focus_next();
            type_str(app, value);
        }
        app.focus_next();
        app.type_char('b');
    }

    #[test]
    fn test_save_appends_encoded_block() {
        let mut app = AuthorApp::new(MemoryStorage::new()).unwrap();
        fill_form(&mut app);
        app.save_draft().unwrap();

        assert_eq!(
            app.storage().read().unwrap(),
            "Question: 2+2?\n[OPTIONS]\noption_a: 3\noption_b: 4\noption_c: 5\noption_d: 22\nCorrect Answer: option_b\n"
        );
        assert_eq!(app.record_count(), 1);
        assert_eq!(app.draft(), &Draft::new());
        assert_eq!(app.focus(), FormFocus::Prompt);
    }

    #[test]
    fn test_save_after_unterminated_text_starts_new_line() {
        let existing = "Question: a\n[OPTIONS]\noption_a: 1\noption_b: 2\noption_c: 3\noption_d: 4\nCorrect Answer: option_a";
        let mut app = AuthorApp::new(MemoryStorage::with_text(existing)).unwrap();
        fill_form(&mut app);
        app.save_draft().unwrap();

        let text = app.storage().read().unwrap();
        assert!(text.contains("Correct Answer: option_a\nQuestion: 2+2?\n"));
        assert_eq!(app.record_count(), 2);
        assert_eq!(codec::decode_all(&text).questions.len(), 2);
    }

    #[test]
    fn test_incomplete_form_writes_nothing() {
        let mut app = AuthorApp::new(MemoryStorage::new()).unwrap();
        type_str(&mut app, "only a prompt");

        assert!(app.save_draft().is_err());
        assert_eq!(app.storage().read().unwrap(), "");
        assert_eq!(app.draft().prompt, "only a prompt");
        assert!(matches!(app.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = AuthorApp::new(MemoryStorage::new()).unwrap();
        app.focus_previous();
        assert_eq!(app.focus(), FormFocus::Correct);
        app.focus_next();
        assert_eq!(app.focus(), FormFocus::Prompt);
    }

    #[test]
    fn test_cycle_correct() {
        let mut app = AuthorApp::new(MemoryStorage::new()).unwrap();
        app.cycle_correct(false);
        assert_eq!(app.draft().correct, Some(OptionKey::D));
        app.cycle_correct(true);
        assert_eq!(app.draft().correct, Some(OptionKey::A));
    }

    #[test]
    fn test_raw_edit_overwrites_store() {
        let mut app = AuthorApp::new(MemoryStorage::with_text("Question: x\n")).unwrap();
        app.open_raw();
        assert_eq!(app.view, AuthorView::Raw);

        let editor = app.editor_mut().unwrap();
        editor.backspace();
        editor.insert_char('!');
        app.save_raw().unwrap();

        assert_eq!(app.storage().read().unwrap(), "!Question: x\n");
        assert_eq!(app.record_count(), 0);
    }

    #[test]
    fn test_close_raw_discards_edits() {
        let mut app = AuthorApp::new(MemoryStorage::with_text("keep")).unwrap();
        app.open_raw();
        if let Some(editor) = app.editor_mut() {
            editor.insert_char('x');
        }
        app.close_raw();

        assert_eq!(app.view, AuthorView::Form);
        assert_eq!(app.storage().read().unwrap(), "keep");
        assert!(app.editor().is_none());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut app = AuthorApp::new(MemoryStorage::with_text("Question: x\n")).unwrap();
        assert_eq!(app.record_count(), 1);

        app.request_clear();
        app.cancel_clear();
        assert_eq!(app.storage().read().unwrap(), "Question: x\n");

        app.request_clear();
        app.confirm_clear().unwrap();
        assert_eq!(app.storage().read().unwrap(), "");
        assert_eq!(app.record_count(), 0);
    }
}
