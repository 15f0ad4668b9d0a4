//! Error types.
//!
//! Malformed blocks found while decoding are not errors; they are reported
//! as [`crate::codec::BlockWarning`]s alongside the decoded questions.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::OptionKey;

/// A form field the author has to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prompt,
    Option(OptionKey),
    CorrectAnswer,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Prompt => f.write_str("question"),
            Field::Option(key) => write!(f, "option {}", key.label()),
            Field::CorrectAnswer => f.write_str("correct answer"),
        }
    }
}

/// Rejected authoring input. Nothing is written when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("please fill in: {}", join_fields(.0))]
    MissingInput(Vec<Field>),
}

pub(crate) fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure talking to the storage file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// Nothing could be loaded, so there is no quiz to take.
    #[error("no quiz questions loaded from {0}, check the storage file")]
    NoQuestions(String),
    #[error("failed to set up logging: {0}")]
    Logging(String),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
