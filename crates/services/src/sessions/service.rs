use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::Shuffler;
use quiz_core::model::{OPTION_COUNT, QuestionRecord, QuizSettings};

use super::celebration::Celebration;
use super::progress::SessionProgress;
use super::report::SessionReport;
use crate::error::SessionError;

/// Where a loaded session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Finished,
}

/// Immediate feedback for a selected answer.
///
/// Scoring is not touched by selection; this only tells the caller how the
/// choice will be judged once the session advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub display_index: usize,
    pub correct_display_index: usize,
    pub is_correct: bool,
    pub celebration: Option<Celebration>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a shuffled question bank.
///
/// Options of the current question are shown in `answer_order`, where
/// `answer_order[display]` is the original option index. Scoring happens on
/// `advance`, never on `select_answer`.
pub struct QuizSession {
    settings: QuizSettings,
    shuffler: Shuffler,
    questions: Vec<QuestionRecord>,
    current: usize,
    answer_order: Vec<usize>,
    selected: Option<usize>,
    score: usize,
    missed: Vec<QuestionRecord>,
    completed: bool,
}

impl QuizSession {
    /// Start a session over `questions`, shuffling them per `settings`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if no questions are provided.
    pub fn start(
        questions: Vec<QuestionRecord>,
        settings: QuizSettings,
        shuffler: Shuffler,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyBank { dropped: 0 });
        }

        let mut session = Self {
            settings,
            shuffler,
            questions,
            current: 0,
            answer_order: Vec::new(),
            selected: None,
            score: 0,
            missed: Vec::new(),
            completed: false,
        };
        session.order_questions();
        session.order_answers();
        Ok(session)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Finished
        } else {
            SessionPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Questions in session order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_position(&self) -> usize {
        self.current
    }

    /// The question awaiting an answer, or `None` once the session is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    #[must_use]
    pub fn current_prompt(&self) -> Option<&str> {
        self.current_question().map(QuestionRecord::prompt)
    }

    /// Option texts of the current question in display order.
    #[must_use]
    pub fn current_options(&self) -> Vec<&str> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        self.answer_order
            .iter()
            .map(|&original| question.options()[original].as_str())
            .collect()
    }

    /// Display position to original option index for the current question.
    #[must_use]
    pub fn answer_order(&self) -> &[usize] {
        &self.answer_order
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        if self.completed { None } else { self.selected }
    }

    /// First display position whose text equals the correct option's text.
    ///
    /// Matching is by text, so with duplicate option texts this is the first
    /// displayed duplicate.
    #[must_use]
    pub fn correct_display_index(&self) -> Option<usize> {
        let question = self.current_question()?;
        let correct = question.correct_option();
        self.answer_order
            .iter()
            .position(|&original| question.options()[original] == correct)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions answered incorrectly, in the order they were met.
    #[must_use]
    pub fn missed(&self) -> &[QuestionRecord] {
        &self.missed
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.score + self.missed.len();
        SessionProgress {
            position: self.current,
            total: self.questions.len(),
            answered,
            remaining: self.questions.len().saturating_sub(answered),
            score: self.score,
            is_complete: self.completed,
        }
    }

    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport::new(self.score, self.questions.len(), &self.missed)
    }

    /// Record the user's choice for the current question.
    ///
    /// `now` stamps the celebration emitted for a correct choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished,
    /// `SessionError::DisplayIndexOutOfRange` for an index past the options,
    /// and `SessionError::AlreadyAnswered` if a choice was already made.
    pub fn select_answer(
        &mut self,
        display_index: usize,
        now: DateTime<Utc>,
    ) -> Result<AnswerFeedback, SessionError> {
        let Some(correct_display_index) = self.correct_display_index() else {
            return Err(SessionError::Completed);
        };
        if display_index >= self.answer_order.len() {
            return Err(SessionError::DisplayIndexOutOfRange {
                index: display_index,
                len: self.answer_order.len(),
            });
        }
        if self.selected.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }

        self.selected = Some(display_index);
        let is_correct = display_index == correct_display_index;
        tracing::debug!(
            position = self.current,
            display_index,
            is_correct,
            "answer selected"
        );

        Ok(AnswerFeedback {
            display_index,
            correct_display_index,
            is_correct,
            celebration: is_correct
                .then(|| Celebration::starting_at(now, self.settings.celebration_duration())),
        })
    }

    /// Score the current selection and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished and
    /// `SessionError::NoSelection` if no answer was chosen yet.
    pub fn advance(&mut self) -> Result<SessionPhase, SessionError> {
        let Some(correct_display_index) = self.correct_display_index() else {
            return Err(SessionError::Completed);
        };
        let Some(selected) = self.selected else {
            return Err(SessionError::NoSelection);
        };

        if selected == correct_display_index {
            self.score += 1;
        } else {
            self.missed.push(self.questions[self.current].clone());
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.order_answers();
            tracing::debug!(position = self.current, score = self.score, "advanced to next question");
        } else {
            self.completed = true;
            tracing::debug!(
                score = self.score,
                missed = self.missed.len(),
                total = self.questions.len(),
                "session finished"
            );
        }

        Ok(self.phase())
    }

    /// Start over with a fresh question order and zeroed results.
    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.missed.clear();
        self.completed = false;
        self.order_questions();
        self.order_answers();
        tracing::debug!(total = self.questions.len(), "session reset");
    }

    fn order_questions(&mut self) {
        if self.settings.shuffle_questions() {
            self.questions = self.shuffler.shuffle(&self.questions);
        }
    }

    fn order_answers(&mut self) {
        self.answer_order = if self.settings.shuffle_options() {
            self.shuffler.permutation(OPTION_COUNT)
        } else {
            (0..OPTION_COUNT).collect()
        };
        self.selected = None;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answer_order", &self.answer_order)
            .field("selected", &self.selected)
            .field("score", &self.score)
            .field("missed_len", &self.missed.len())
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
