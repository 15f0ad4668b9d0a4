use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{DraftError, Field};

/// One of the four fixed answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionKey {
    #[serde(rename = "option_a")]
    A,
    #[serde(rename = "option_b")]
    B,
    #[serde(rename = "option_c")]
    C,
    #[serde(rename = "option_d")]
    D,
}

impl OptionKey {
    /// Every key, in the order options are stored and written.
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Name used in the storage file, e.g. `option_a`.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::A => "option_a",
            OptionKey::B => "option_b",
            OptionKey::C => "option_c",
            OptionKey::D => "option_d",
        }
    }

    /// Single letter shown next to the option on screen.
    pub fn label(self) -> char {
        match self {
            OptionKey::A => 'A',
            OptionKey::B => 'B',
            OptionKey::C => 'C',
            OptionKey::D => 'D',
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `option_a`..`option_d`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option key: {0:?}")]
pub struct UnknownOptionKey(pub String);

impl FromStr for OptionKey {
    type Err = UnknownOptionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownOptionKey(s.to_string()))
    }
}

/// A multiple-choice question with exactly four options.
///
/// Values are stored trimmed and are never empty, so a question always
/// survives being written out and read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    prompt: String,
    options: [String; 4],
    correct: OptionKey,
}

/// Unchecked shape of a deserialized question.
#[derive(Deserialize)]
struct RawQuestion {
    prompt: String,
    options: [String; 4],
    correct: OptionKey,
}

impl TryFrom<RawQuestion> for Question {
    type Error = DraftError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.prompt, raw.options, raw.correct)
    }
}

impl Question {
    /// Build a question, trimming every value.
    ///
    /// Fails with [`DraftError::MissingInput`] listing each field that is
    /// empty after trimming.
    pub fn new<P, O>(prompt: P, options: [O; 4], correct: OptionKey) -> Result<Self, DraftError>
    where
        P: AsRef<str>,
        O: AsRef<str>,
    {
        let prompt = prompt.as_ref().trim().to_string();
        let options = options.map(|option| option.as_ref().trim().to_string());

        let mut missing = Vec::new();
        if prompt.is_empty() {
            missing.push(Field::Prompt);
        }
        for key in OptionKey::ALL {
            if options[key.index()].is_empty() {
                missing.push(Field::Option(key));
            }
        }
        if !missing.is_empty() {
            return Err(DraftError::MissingInput(missing));
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }

    pub fn correct(&self) -> OptionKey {
        self.correct
    }

    pub fn correct_text(&self) -> &str {
        self.option(self.correct)
    }

    pub fn is_correct(&self, answer: OptionKey) -> bool {
        answer == self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_key_names() {
        let names: Vec<&str> = OptionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["option_a", "option_b", "option_c", "option_d"]);
        assert_eq!("option_c".parse::<OptionKey>(), Ok(OptionKey::C));
        assert!("option_e".parse::<OptionKey>().is_err());
        assert!("Option_A".parse::<OptionKey>().is_err());
        assert_eq!(OptionKey::from_index(3), Some(OptionKey::D));
        assert_eq!(OptionKey::from_index(4), None);
    }

    #[test]
    fn test_new_trims_values() {
        let q = Question::new("  2+2? ", [" 3", "4 ", "5", "22"], OptionKey::B).unwrap();
        assert_eq!(q.prompt(), "2+2?");
        assert_eq!(q.options(), &["3", "4", "5", "22"].map(String::from));
        assert_eq!(q.correct_text(), "4");
    }

    #[test]
    fn test_new_reports_every_empty_field() {
        let err = Question::new(" ", ["a", "", "c", "  "], OptionKey::A).unwrap_err();
        assert_eq!(
            err,
            DraftError::MissingInput(vec![
                Field::Prompt,
                Field::Option(OptionKey::B),
                Field::Option(OptionKey::D),
            ])
        );
    }

    #[test]
    fn test_serializes_with_wire_key_names() {
        let q = Question::new("2+2?", ["3", "4", "5", "22"], OptionKey::B).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"correct\":\"option_b\""));
        assert!(json.contains("\"prompt\":\"2+2?\""));
    }

    #[test]
    fn test_deserialize_validates() {
        let q = Question::new("2+2?", ["3", "4", "5", "22"], OptionKey::B).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(serde_json::from_str::<Question>(&json).unwrap(), q);

        let empty_prompt =
            r#"{"prompt":" ","options":["3","4","5","22"],"correct":"option_b"}"#;
        let err = serde_json::from_str::<Question>(empty_prompt).unwrap_err();
        assert!(err.to_string().contains("please fill in: question"));

        let bad_key = r#"{"prompt":"q","options":["3","4","5","22"],"correct":"option_e"}"#;
        assert!(serde_json::from_str::<Question>(bad_key).is_err());
    }

    #[test]
    fn test_unknown_key_message() {
        let err = "option_x".parse::<OptionKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown option key: \"option_x\"");
    }
}
