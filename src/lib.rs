//! # quiz-forge
//!
//! Write multiple-choice questions into a flat text file and take them as a
//! shuffled quiz in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_forge::{FileStorage, OptionKey, Question, QuizError, Storage, encode};
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut storage = FileStorage::new("quiz_storage.txt");
//!     let question = Question::new("2+2?", ["3", "4", "5", "22"], OptionKey::B)?;
//!     storage.append(&encode(&question))?;
//!
//!     // Take the quiz in the terminal, in random order
//!     quiz_forge::run_taker(storage, rand::thread_rng())?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod author;
pub mod codec;
pub mod config;
mod error;
pub mod logging;
mod models;
pub mod session;
pub mod storage;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

pub use app::App;
pub use author::{AuthorApp, AuthorView, Draft};
pub use codec::{BlockWarning, Decoded, MalformedBlock, decode_all, encode};
pub use config::Config;
pub use error::{ConfigError, DraftError, Field, QuizError, StorageError};
pub use models::{AppState, OptionKey, Question, UnknownOptionKey};
pub use session::{QuizSession, Report};
pub use storage::{FileStorage, MemoryStorage, Storage};

/// Take the quiz stored in `storage` in the terminal.
///
/// Fails before touching the terminal if no question can be loaded, and
/// ends the session the same way if a restart finds the store empty.
pub fn run_taker<S: Storage, R: Rng>(storage: S, rng: R) -> Result<(), QuizError> {
    let mut app = App::new(storage, rng)?;
    terminal::with_terminal(|term| run_taker_loop(term, &mut app))
}

/// Open the question author in the terminal.
pub fn run_author<S: Storage>(storage: S) -> Result<(), QuizError> {
    let mut app = AuthorApp::new(storage)?;
    terminal::with_terminal(|term| run_author_loop(term, &mut app))
}

fn run_taker_loop<S: Storage, R: Rng>(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<S, R>,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render_taker(frame, app))?;

        if let Some(key) = read_key_press()? {
            if handle_taker_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

fn run_author_loop<S: Storage>(
    terminal: &mut terminal::AppTerminal,
    app: &mut AuthorApp<S>,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render_author(frame, app))?;

        if let Some(key) = read_key_press()? {
            if handle_author_input(app, key) {
                break;
            }
        }
    }

    Ok(())
}

fn read_key_press() -> Result<Option<KeyEvent>, QuizError> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Returns true if the app should exit.
fn handle_taker_input<S: Storage, R: Rng>(
    app: &mut App<S, R>,
    key: KeyCode,
) -> Result<bool, QuizError> {
    let quit = match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key)?,
    };
    Ok(quit)
}

fn handle_welcome_input<S: Storage, R: Rng>(app: &mut App<S, R>, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input<S: Storage, R: Rng>(app: &mut App<S, R>, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
            let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            if let Some(option) = OptionKey::from_index(index) {
                app.select_option(option);
            }
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_result_input<S: Storage, R: Rng>(
    app: &mut App<S, R>,
    key: KeyCode,
) -> Result<bool, QuizError> {
    let quit = match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart()?;
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    };
    Ok(quit)
}

/// Returns true if the author should exit.
fn handle_author_input<S: Storage>(app: &mut AuthorApp<S>, key: KeyEvent) -> bool {
    match app.view {
        AuthorView::Form => handle_form_input(app, key),
        AuthorView::Raw => {
            handle_raw_input(app, key);
            false
        }
        AuthorView::ConfirmClear => {
            handle_confirm_input(app, key.code);
            false
        }
    }
}

// Failed saves are shown on the notice line, so their errors are not
// propagated out of the input handlers.
fn handle_form_input<S: Storage>(app: &mut AuthorApp<S>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                let _ = app.save_draft();
            }
            KeyCode::Char('r') => app.open_raw(),
            KeyCode::Char('d') => app.request_clear(),
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        KeyCode::Left if app.focus() == author::FormFocus::Correct => app.cycle_correct(false),
        KeyCode::Right if app.focus() == author::FormFocus::Correct => app.cycle_correct(true),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
    false
}

fn handle_raw_input<S: Storage>(app: &mut AuthorApp<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            let _ = app.save_raw();
        }
        return;
    }
    if key.code == KeyCode::Esc {
        app.close_raw();
        return;
    }

    let Some(editor) = app.editor_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) => editor.insert_char(c),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        _ => {}
    }
}

fn handle_confirm_input<S: Storage>(app: &mut AuthorApp<S>, key: KeyCode) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let _ = app.confirm_clear();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_clear(),
        _ => {}
    }
}
