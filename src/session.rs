//! One attempt at the quiz: shuffled questions, answers and scoring.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::codec::{self, BlockWarning};
use crate::error::QuizError;
use crate::models::{OptionKey, Question};
use crate::storage::Storage;

/// A wrong answer, as shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Miss {
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: usize,
    pub total: usize,
    pub misses: Vec<Miss>,
}

impl Report {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.misses.is_empty()
    }
}

pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<OptionKey>,
    warnings: Vec<BlockWarning>,
}

impl QuizSession {
    /// Start a session over `questions`, shuffled with `rng`.
    pub fn new<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Self {
        questions.shuffle(rng);
        Self {
            questions,
            answers: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Read and decode the store, then shuffle.
    ///
    /// A store with no readable question is an error: there is nothing to ask.
    pub fn load<S, R>(storage: &S, rng: &mut R) -> Result<Self, QuizError>
    where
        S: Storage + ?Sized,
        R: Rng + ?Sized,
    {
        let decoded = codec::decode_all(&storage.read()?);
        info!(
            loaded = decoded.questions.len(),
            skipped = decoded.warning_count(),
            source = %storage.location(),
            "loaded quiz questions"
        );
        if decoded.is_empty() {
            return Err(QuizError::NoQuestions(storage.location()));
        }

        let mut session = Self::new(decoded.questions, rng);
        session.warnings = decoded.warnings;
        Ok(session)
    }

    /// Blocks that were skipped while loading.
    pub fn warnings(&self) -> &[BlockWarning] {
        &self.warnings
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[OptionKey] {
        &self.answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question waiting for an answer, `None` once all are answered.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.answers.len())
    }

    /// 1-based position of the current question.
    pub fn current_number(&self) -> usize {
        (self.answers.len() + 1).min(self.total())
    }

    pub fn is_finished(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Record the answer to the current question. Ignored once finished.
    pub fn submit(&mut self, answer: OptionKey) {
        if !self.is_finished() {
            self.answers.push(answer);
        }
    }

    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| question.is_correct(**answer))
            .count()
    }

    pub fn report(&self) -> Report {
        let misses = self
            .answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| !question.is_correct(**answer))
            .map(|(answer, question)| Miss {
                prompt: question.prompt().to_string(),
                chosen: question.option(*answer).to_string(),
                correct: question.correct_text().to_string(),
            })
            .collect();

        Report {
            score: self.score(),
            total: self.total(),
            misses,
        }
    }
}
