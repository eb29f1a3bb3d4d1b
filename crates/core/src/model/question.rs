use thiserror::Error;

/// Number of answer options carried by every question.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("correct answer {answer:?} matches none of the options")]
    UnknownAnswer { answer: String },
}

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A multiple-choice question as read from the question bank.
///
/// Options keep the order they had in the source record; `correct_index`
/// always points at one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl QuestionRecord {
    /// Creates a record, resolving the correct option by exact text match.
    ///
    /// When several options carry the answer text, the first one is taken.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::UnknownAnswer` if no option equals `correct_answer`.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: &str,
    ) -> Result<Self, QuestionError> {
        let correct_index = options
            .iter()
            .position(|option| option == correct_answer)
            .ok_or_else(|| QuestionError::UnknownAnswer {
                answer: correct_answer.to_owned(),
            })?;

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Returns true when two or more options share the same text.
    ///
    /// Correctness is resolved by text, so such a record can mark more than
    /// one displayed position as matching the answer.
    #[must_use]
    pub fn has_duplicate_options(&self) -> bool {
        self.options
            .iter()
            .enumerate()
            .any(|(i, option)| self.options[i + 1..].contains(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(texts: [&str; OPTION_COUNT]) -> [String; OPTION_COUNT] {
        texts.map(String::from)
    }

    #[test]
    fn resolves_correct_index_by_text() {
        let record =
            QuestionRecord::new("Capital of Norway?", options(["Bergen", "Oslo", "Tromsø", "Bodø"]), "Oslo")
                .unwrap();

        assert_eq!(record.correct_index(), 1);
        assert_eq!(record.correct_option(), "Oslo");
        assert_eq!(record.option(3), Some("Bodø"));
        assert_eq!(record.option(4), None);
    }

    #[test]
    fn unknown_answer_is_rejected() {
        let err = QuestionRecord::new("Q", options(["A", "B", "C", "D"]), "E").unwrap_err();
        assert_eq!(
            err,
            QuestionError::UnknownAnswer {
                answer: "E".to_string()
            }
        );
    }

    #[test]
    fn answer_match_is_exact() {
        let err = QuestionRecord::new("Q", options(["a", "B", "C", "D"]), "A").unwrap_err();
        assert!(matches!(err, QuestionError::UnknownAnswer { .. }));
    }

    #[test]
    fn duplicate_options_pick_first_match() {
        let record = QuestionRecord::new("Q", options(["A", "B", "A", "D"]), "A").unwrap();
        assert_eq!(record.correct_index(), 0);
        assert!(record.has_duplicate_options());

        let distinct = QuestionRecord::new("Q", options(["A", "B", "C", "D"]), "D").unwrap();
        assert!(!distinct.has_duplicate_options());
    }
}
