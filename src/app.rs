use rand::Rng;

use crate::error::QuizError;
use crate::models::{AppState, OptionKey, Question};
use crate::session::{QuizSession, Report};
use crate::storage::Storage;

/// Prompt, chosen answer, correct answer and a blank line.
pub const RESULT_LINES_PER_MISS: usize = 4;

/// Quiz-taking screen state.
pub struct App<S: Storage, R: Rng> {
    pub state: AppState,
    storage: S,
    rng: R,
    session: QuizSession,
    selected_option: Option<OptionKey>,
    warning: Option<String>,
    result_scroll: usize,
}

impl<S: Storage, R: Rng> App<S, R> {
    /// Load and shuffle the questions. Fails when none can be read.
    pub fn new(storage: S, mut rng: R) -> Result<Self, QuizError> {
        let session = QuizSession::load(&storage, &mut rng)?;
        Ok(Self {
            state: AppState::Welcome,
            storage,
            rng,
            session,
            selected_option: None,
            warning: None,
            result_scroll: 0,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current()
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_number()
    }

    pub fn total_questions(&self) -> usize {
        self.session.total()
    }

    /// Blocks of the store that could not be read.
    pub fn skipped_blocks(&self) -> usize {
        self.session.warnings().len()
    }

    pub fn selected_option(&self) -> Option<OptionKey> {
        self.selected_option
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_option(&mut self, key: OptionKey) {
        self.selected_option = Some(key);
        self.warning = None;
    }

    pub fn select_next_option(&mut self) {
        let next = self.selected_option.map_or(0, |key| (key.index() + 1) % 4);
        self.selected_option = OptionKey::from_index(next);
        self.warning = None;
    }

    pub fn select_previous_option(&mut self) {
        let previous = self.selected_option.map_or(3, |key| (key.index() + 3) % 4);
        self.selected_option = OptionKey::from_index(previous);
        self.warning = None;
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    /// Record the selected option and move on. Without a selection nothing
    /// happens except a warning.
    pub fn submit_answer(&mut self) {
        let Some(answer) = self.selected_option.take() else {
            self.warning = Some("Please select an option.".to_string());
            return;
        };
        self.session.submit(answer);

        if self.session.is_finished() {
            self.state = AppState::Result;
            self.result_scroll = 0;
        }
    }

    pub fn report(&self) -> Report {
        self.session.report()
    }

    /// Stops at the last line of the missed-question list.
    pub fn scroll_results_down(&mut self) {
        let max = self.result_lines().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max);
    }

    /// Lines the results screen lists for the missed questions.
    pub fn result_lines(&self) -> usize {
        self.session.report().misses.len() * RESULT_LINES_PER_MISS
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Reload the store and reshuffle for another attempt.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.session = QuizSession::load(&self.storage, &mut self.rng)?;
        self.state = AppState::Welcome;
        self.selected_option = None;
        self.warning = None;
        self.result_scroll = 0;
        Ok(())
    }
}
