//! Text format of the question storage file.
//!
//! A file is a plain concatenation of blocks, one per question:
//!
//! ```text
//! Question: 2+2?
//! [OPTIONS]
//! option_a: 3
//! option_b: 4
//! option_c: 5
//! option_d: 22
//! Correct Answer: option_b
//! ```
//!
//! There is no header, version tag or separator; a block ends where the next
//! `Question: ` begins. Blocks are read by line position, so nothing inside a
//! value is escaped.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{DraftError, Field, join_fields};
use crate::models::{OptionKey, Question};

/// Starts every block, and is what splits a file into blocks.
pub const QUESTION_MARKER: &str = "Question: ";
const OPTIONS_MARKER: &str = "[OPTIONS]";
const CORRECT_MARKER: &str = "Correct Answer: ";
const BLOCK_LINES: usize = 7;
const FIRST_OPTION_LINE: usize = 2;
const CORRECT_LINE: usize = 6;

/// Serialize one question as a block, newline terminated.
///
/// Options are always written in `option_a`..`option_d` order.
///
/// # Format limitation
///
/// Values are written verbatim. A prompt or option that contains a line
/// break, `Question: `, or `option_x: ` produces a block that will not read
/// back as the same question (or at all). Callers that accept free text are
/// expected to keep such input out.
pub fn encode(question: &Question) -> String {
    let mut block = format!("{QUESTION_MARKER}{}\n{OPTIONS_MARKER}\n", question.prompt());
    for key in OptionKey::ALL {
        block.push_str(&format!("{}: {}\n", key, question.option(key)));
    }
    block.push_str(&format!("{CORRECT_MARKER}{}\n", question.correct()));
    block
}

/// Why a block was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBlock {
    #[error("expected at least 7 lines, found {0}")]
    TooShort(usize),
    #[error("line {line} does not contain {marker:?}")]
    MissingField { line: usize, marker: String },
    #[error("correct answer {0:?} is not one of option_a..option_d")]
    UnknownCorrectKey(String),
    #[error("empty {}", join_fields(.0))]
    EmptyField(Vec<Field>),
}

/// A skipped block and its 1-based position among the blocks of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockWarning {
    pub block: usize,
    pub kind: MalformedBlock,
}

impl fmt::Display for BlockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question block {}: {}", self.block, self.kind)
    }
}

/// Everything that could be read from a file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub questions: Vec<Question>,
    pub warnings: Vec<BlockWarning>,
}

impl Decoded {
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Decode every well-formed block of `text`.
///
/// Text before the first `Question: ` is ignored. A malformed block is
/// logged, recorded in [`Decoded::warnings`] and skipped; it never stops the
/// blocks after it from being read.
pub fn decode_all(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    let mut chunks = text.trim().split(QUESTION_MARKER);
    chunks.next();

    for (index, chunk) in chunks.enumerate() {
        let block = index + 1;
        match decode_block(chunk) {
            Ok(question) => decoded.questions.push(question),
            Err(kind) => {
                warn!(block, "skipping question block: {}", kind);
                decoded.warnings.push(BlockWarning { block, kind });
            }
        }
    }

    decoded
}

fn decode_block(chunk: &str) -> Result<Question, MalformedBlock> {
    let lines: Vec<&str> = chunk.trim().lines().collect();
    if lines.len() < BLOCK_LINES {
        return Err(MalformedBlock::TooShort(lines.len()));
    }

    let prompt = lines[0].trim();

    // Read by position; the marker line itself is not required.
    if lines[1].trim() != OPTIONS_MARKER {
        debug!(found = lines[1], "options marker missing, reading by position");
    }

    let mut options: [&str; 4] = [""; 4];
    for key in OptionKey::ALL {
        let line = FIRST_OPTION_LINE + key.index();
        options[key.index()] = value_after(lines[line], &format!("{key}: "), line)?;
    }

    let correct = value_after(lines[CORRECT_LINE], CORRECT_MARKER, CORRECT_LINE)?;
    let correct: OptionKey = correct
        .parse()
        .map_err(|_| MalformedBlock::UnknownCorrectKey(correct.to_string()))?;

    Question::new(prompt, options, correct).map_err(|err| match err {
        DraftError::MissingInput(fields) => MalformedBlock::EmptyField(fields),
    })
}

/// Everything after the first `marker` on the line, trimmed.
fn value_after<'a>(line: &'a str, marker: &str, index: usize) -> Result<&'a str, MalformedBlock> {
    line.split_once(marker)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| MalformedBlock::MissingField {
            line: index + 1,
            marker: marker.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PLUS_TWO: &str = "Question: 2+2?\n[OPTIONS]\noption_a: 3\noption_b: 4\noption_c: 5\noption_d: 22\nCorrect Answer: option_b\n";

    fn two_plus_two() -> Question {
        Question::new("2+2?", ["3", "4", "5", "22"], OptionKey::B).unwrap()
    }

    fn capital() -> Question {
        Question::new(
            "Capital of France?",
            ["Berlin", "Paris", "Rome", "Madrid"],
            OptionKey::B,
        )
        .unwrap()
    }

    #[test]
    fn test_encode_exact_block() {
        assert_eq!(encode(&two_plus_two()), TWO_PLUS_TWO);
    }

    #[test]
    fn test_decode_exact_block() {
        let decoded = decode_all(TWO_PLUS_TWO);
        assert_eq!(decoded.questions, vec![two_plus_two()]);
        assert_eq!(decoded.warning_count(), 0);
    }

    #[test]
    fn test_round_trip_every_correct_key() {
        for key in OptionKey::ALL {
            let q = Question::new("Pick one", ["w", "x", "y", "z"], key).unwrap();
            let decoded = decode_all(&encode(&q));
            assert_eq!(decoded.questions, vec![q.clone()]);

            let again = decode_all(&encode(&decoded.questions[0]));
            assert_eq!(again.questions, vec![q]);
        }
    }

    #[test]
    fn test_empty_text() {
        let decoded = decode_all("");
        assert!(decoded.is_empty());
        assert_eq!(decoded.warning_count(), 0);

        assert!(decode_all("  \n\n ").is_empty());
    }

    #[test]
    fn test_text_without_marker_has_no_blocks() {
        let decoded = decode_all("just some notes\nnothing else\n");
        assert!(decoded.is_empty());
        assert_eq!(decoded.warning_count(), 0);
    }

    #[test]
    fn test_leading_garbage_ignored() {
        let text = format!("scratch notes\n\n{}", TWO_PLUS_TWO);
        assert_eq!(decode_all(&text).questions, vec![two_plus_two()]);
    }

    #[test]
    fn test_order_preserved() {
        let text = format!("{}{}{}", encode(&capital()), TWO_PLUS_TWO, encode(&capital()));
        let decoded = decode_all(&text);
        assert_eq!(decoded.questions, vec![capital(), two_plus_two(), capital()]);
    }

    #[test]
    fn test_truncated_block_isolated() {
        let text = format!("{}Question: half\n[OPTIONS]\noption_a: 1\n", TWO_PLUS_TWO);
        let decoded = decode_all(&text);
        assert_eq!(decoded.questions, vec![two_plus_two()]);
        assert_eq!(
            decoded.warnings,
            vec![BlockWarning {
                block: 2,
                kind: MalformedBlock::TooShort(3),
            }]
        );
    }

    #[test]
    fn test_bad_block_does_not_stop_later_blocks() {
        let broken = TWO_PLUS_TWO.replace("option_c: 5", "option_x: 5");
        let text = format!("{}{}", broken, encode(&capital()));
        let decoded = decode_all(&text);
        assert_eq!(decoded.questions, vec![capital()]);
        assert_eq!(
            decoded.warnings[0].kind,
            MalformedBlock::MissingField {
                line: 5,
                marker: "option_c: ".to_string(),
            }
        );
    }

    #[test]
    fn test_reordered_options_rejected() {
        let text = "Question: q\n[OPTIONS]\noption_b: 2\noption_a: 1\noption_c: 3\noption_d: 4\nCorrect Answer: option_a\n";
        let decoded = decode_all(text);
        assert!(decoded.is_empty());
        assert_eq!(decoded.warning_count(), 1);
    }

    #[test]
    fn test_unknown_correct_key_rejected() {
        let text = TWO_PLUS_TWO.replace("Correct Answer: option_b", "Correct Answer: option_e");
        let decoded = decode_all(&text);
        assert!(decoded.is_empty());
        assert_eq!(
            decoded.warnings[0].kind,
            MalformedBlock::UnknownCorrectKey("option_e".to_string())
        );
    }

    #[test]
    fn test_missing_correct_line_marker() {
        let text = TWO_PLUS_TWO.replace("Correct Answer: option_b", "Answer option_b");
        let decoded = decode_all(&text);
        assert!(matches!(
            decoded.warnings[0].kind,
            MalformedBlock::MissingField { line: 7, .. }
        ));
    }

    #[test]
    fn test_options_marker_not_required() {
        let text = TWO_PLUS_TWO.replace("[OPTIONS]", "whatever");
        assert_eq!(decode_all(&text).questions, vec![two_plus_two()]);
    }

    #[test]
    fn test_empty_option_rejected() {
        let text = TWO_PLUS_TWO.replace("option_d: 22", "option_d: ");
        let decoded = decode_all(&text);
        assert!(decoded.is_empty());
        assert_eq!(
            decoded.warnings[0].kind,
            MalformedBlock::EmptyField(vec![Field::Option(OptionKey::D)])
        );
    }

    #[test]
    fn test_value_is_text_after_first_marker() {
        let text = TWO_PLUS_TWO.replace("option_a: 3", "option_a: 3 or option_a: 33");
        let decoded = decode_all(&text);
        assert_eq!(decoded.questions[0].option(OptionKey::A), "3 or option_a: 33");
    }

    #[test]
    fn test_extra_lines_inside_block_ignored() {
        let text = format!("{}trailing note\n{}", TWO_PLUS_TWO, encode(&capital()));
        let decoded = decode_all(&text);
        assert_eq!(decoded.questions, vec![two_plus_two(), capital()]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = TWO_PLUS_TWO.replace('\n', "\r\n");
        assert_eq!(decode_all(&text).questions, vec![two_plus_two()]);
    }

    #[test]
    fn test_warning_display() {
        let warning = BlockWarning {
            block: 4,
            kind: MalformedBlock::TooShort(2),
        };
        assert_eq!(
            warning.to_string(),
            "question block 4: expected at least 7 lines, found 2"
        );
    }
}
