mod question;

pub use question::{OptionKey, Question, UnknownOptionKey};

/// Which screen the quiz taker is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
