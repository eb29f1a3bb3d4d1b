//! Question bank ingestion.
//!
//! The bank is CSV text with one header row followed by records of six
//! fields: prompt, four options and the text of the correct option. Quoting
//! follows RFC 4180: a field that opens with `"` may carry commas or
//! newlines and uses `""` for a literal quote, while a `"` later in an
//! unquoted field is kept as is.

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::model::{OPTION_COUNT, QuestionError, QuestionRecord};

/// Fields per record: the prompt, every option, then the correct answer text.
pub const FIELD_COUNT: usize = OPTION_COUNT + 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordError {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },
    #[error("correct answer {answer:?} matches none of the options")]
    UnknownAnswer { answer: String },
    #[error("unreadable record: {reason}")]
    Unreadable { reason: String },
}

impl From<QuestionError> for RecordError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::UnknownAnswer { answer } => Self::UnknownAnswer { answer },
        }
    }
}

/// A record that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub error: RecordError,
}

/// Parser output: usable questions in source order plus the dropped records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBank {
    pub questions: Vec<QuestionRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl ParsedBank {
    /// Number of malformed records that were dropped.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.rejected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Parse the full text of a question bank.
///
/// Blank records are skipped, the first remaining record is the header and
/// is discarded. Malformed records end up in `ParsedBank::rejected`; this
/// never fails as a whole.
#[must_use]
pub fn parse_bank(text: &str) -> ParsedBank {
    let mut bank = ParsedBank::default();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut seen_header = false;
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                bank.rejected.push(RejectedRecord {
                    line: err.position().map_or(0, |pos| line_of(pos.line())),
                    error: RecordError::Unreadable {
                        reason: err.to_string(),
                    },
                });
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        if !seen_header {
            seen_header = true;
            continue;
        }

        let line = record.position().map_or(0, |pos| line_of(pos.line()));
        match parse_record(&record) {
            Ok(question) => bank.questions.push(question),
            Err(error) => bank.rejected.push(RejectedRecord { line, error }),
        }
    }

    bank
}

/// Turn one trimmed record into a question.
///
/// Trailing empty fields past the sixth (stray trailing commas) are ignored.
fn parse_record(record: &StringRecord) -> Result<QuestionRecord, RecordError> {
    let mut fields: Vec<&str> = record.iter().collect();
    while fields.len() > FIELD_COUNT && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    let found = fields.len();
    let [prompt, a, b, c, d, answer] = <[&str; FIELD_COUNT]>::try_from(fields)
        .map_err(|_| RecordError::FieldCount { found })?;

    Ok(QuestionRecord::new(
        prompt,
        [a, b, c, d].map(str::to_owned),
        answer,
    )?)
}

/// A whitespace-only line reads back as a single empty field once trimmed.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

fn line_of(line: u64) -> usize {
    usize::try_from(line).unwrap_or(usize::MAX)
}
