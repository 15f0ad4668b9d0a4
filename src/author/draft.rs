use crate::error::{DraftError, Field};
use crate::models::{OptionKey, Question};

/// What the author has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub prompt: String,
    pub options: [String; 4],
    pub correct: Option<OptionKey>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option_mut(&mut self, key: OptionKey) -> &mut String {
        &mut self.options[key.index()]
    }

    /// Validate into a [`Question`], naming every field that is still empty.
    pub fn to_question(&self) -> Result<Question, DraftError> {
        let built = Question::new(
            &self.prompt,
            self.options.each_ref(),
            self.correct.unwrap_or(OptionKey::A),
        );

        match (built, self.correct) {
            (Ok(question), Some(_)) => Ok(question),
            (Ok(_), None) => Err(DraftError::MissingInput(vec![Field::CorrectAnswer])),
            (Err(DraftError::MissingInput(mut fields)), correct) => {
                if correct.is_none() {
                    fields.push(Field::CorrectAnswer);
                }
                Err(DraftError::MissingInput(fields))
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_draft() {
        let draft = Draft {
            prompt: "2+2?".to_string(),
            options: ["3", "4", "5", "22"].map(String::from),
            correct: Some(OptionKey::B),
        };
        let question = draft.to_question().unwrap();
        assert_eq!(question.correct_text(), "4");
    }

    #[test]
    fn test_empty_draft_lists_everything() {
        let err = Draft::new().to_question().unwrap_err();
        assert_eq!(
            err,
            DraftError::MissingInput(vec![
                Field::Prompt,
                Field::Option(OptionKey::A),
                Field::Option(OptionKey::B),
                Field::Option(OptionKey::C),
                Field::Option(OptionKey::D),
                Field::CorrectAnswer,
            ])
        );
    }

    #[test]
    fn test_missing_selection_only() {
        let draft = Draft {
            prompt: "q".to_string(),
            options: ["1", "2", "3", "4"].map(String::from),
            correct: None,
        };
        assert_eq!(
            draft.to_question(),
            Err(DraftError::MissingInput(vec![Field::CorrectAnswer]))
        );
    }
}
