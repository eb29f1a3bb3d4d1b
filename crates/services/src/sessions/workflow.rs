use quiz_core::bank::{RejectedRecord, parse_bank};
use quiz_core::model::{QuizSettings, QuizSettingsDraft};
use quiz_core::{Clock, Shuffler};

use super::service::{AnswerFeedback, QuizSession, SessionPhase};
use crate::error::SessionError;

/// Lifecycle of the engine as seen by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Loading,
    InProgress,
    Finished,
}

impl From<SessionPhase> for EngineState {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::InProgress => Self::InProgress,
            SessionPhase::Finished => Self::Finished,
        }
    }
}

/// Outcome of loading a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub dropped: usize,
    pub rejected: Vec<RejectedRecord>,
}

/// Owns the quiz state from bank loading to the final report.
///
/// Presenters read state through `session()` and drive it only through
/// `initialize`, `select_answer`, `advance` and `reset`.
#[derive(Debug)]
pub struct QuizEngine {
    settings: QuizSettings,
    clock: Clock,
    session: Option<QuizSession>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self {
            settings,
            clock: Clock::default(),
            session: None,
        }
    }

    /// Build an engine from unvalidated settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Settings` if the draft does not validate.
    pub fn from_draft(draft: QuizSettingsDraft) -> Result<Self, SessionError> {
        Ok(Self::new(draft.validate()?))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.session
            .as_ref()
            .map_or(EngineState::Loading, |session| session.phase().into())
    }

    /// The running session, or `None` while still loading.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Parse the raw bank text and start the session.
    ///
    /// Malformed records are dropped and reported, never fatal.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` if a session is running and
    /// `SessionError::EmptyBank` if no usable question remains.
    pub fn initialize(&mut self, text: &str) -> Result<LoadReport, SessionError> {
        if self.session.is_some() {
            return Err(SessionError::AlreadyLoaded);
        }

        let bank = parse_bank(text);
        for rejected in &bank.rejected {
            tracing::warn!(
                line = rejected.line,
                error = %rejected.error,
                "dropping malformed question record"
            );
        }
        for question in bank.questions.iter().filter(|q| q.has_duplicate_options()) {
            tracing::warn!(
                prompt = question.prompt(),
                "question has duplicate option texts; the first match counts as correct"
            );
        }

        let dropped = bank.dropped();
        if bank.is_empty() {
            tracing::warn!(dropped, "question bank has no usable questions");
            return Err(SessionError::EmptyBank { dropped });
        }

        let loaded = bank.questions.len();
        let session = QuizSession::start(
            bank.questions,
            self.settings,
            Shuffler::from_seed(self.settings.seed()),
        )?;
        self.session = Some(session);
        tracing::info!(loaded, dropped, "question bank loaded");

        Ok(LoadReport {
            loaded,
            dropped,
            rejected: bank.rejected,
        })
    }

    /// Select an option of the current question by display position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoaded` before `initialize`, otherwise see
    /// `QuizSession::select_answer`.
    pub fn select_answer(&mut self, display_index: usize) -> Result<AnswerFeedback, SessionError> {
        let now = self.clock.now();
        self.session_mut()?.select_answer(display_index, now)
    }

    /// Score the current selection and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoaded` before `initialize`, otherwise see
    /// `QuizSession::advance`.
    pub fn advance(&mut self) -> Result<EngineState, SessionError> {
        Ok(self.session_mut()?.advance()?.into())
    }

    /// Restart the loaded bank with fresh orderings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoaded` before `initialize`.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.session_mut()?.reset();
        Ok(())
    }

    fn session_mut(&mut self) -> Result<&mut QuizSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;

    const BANK: &str = "question,a,b,c,d,answer\nQ1,A,B,C,D,A\nbroken,A\nQ2,A,B,C,D,B\n";

    #[test]
    fn engine_starts_in_loading() {
        let mut engine = QuizEngine::new(QuizSettings::fixed_order());
        assert_eq!(engine.state(), EngineState::Loading);
        assert!(engine.session().is_none());
        assert_eq!(engine.select_answer(0).unwrap_err(), SessionError::NotLoaded);
        assert_eq!(engine.advance().unwrap_err(), SessionError::NotLoaded);
        assert_eq!(engine.reset().unwrap_err(), SessionError::NotLoaded);
    }

    #[test]
    fn initialize_reports_dropped_records() {
        let mut engine = QuizEngine::new(QuizSettings::fixed_order());
        let report = engine.initialize(BANK).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.rejected[0].line, 3);
        assert_eq!(engine.state(), EngineState::InProgress);
    }

    #[test]
    fn empty_bank_stays_loading() {
        let mut engine = QuizEngine::new(QuizSettings::default());
        let err = engine.initialize("question,a,b,c,d,answer\nbad,A,B,C,D,E\n").unwrap_err();

        assert_eq!(err, SessionError::EmptyBank { dropped: 1 });
        assert!(!err.is_contract_violation());
        assert_eq!(engine.state(), EngineState::Loading);
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut engine = QuizEngine::new(QuizSettings::fixed_order());
        engine.initialize(BANK).unwrap();

        let err = engine.initialize(BANK).unwrap_err();
        assert_eq!(err, SessionError::AlreadyLoaded);
        assert!(err.is_contract_violation());
    }

    #[test]
    fn celebration_is_stamped_with_engine_clock() {
        let clock = fixed_clock();
        let mut engine = QuizEngine::new(QuizSettings::fixed_order()).with_clock(clock);
        engine.initialize(BANK).unwrap();

        let feedback = engine.select_answer(0).unwrap();
        let celebration = feedback.celebration.expect("correct answer celebrates");
        assert_eq!(celebration.triggered_at(), clock.now());
        assert_eq!(
            celebration.expires_at(),
            clock.now() + engine.settings().celebration_duration()
        );
    }

    #[test]
    fn invalid_draft_is_rejected() {
        let err = QuizEngine::from_draft(QuizSettingsDraft {
            celebration_duration_ms: Some(0),
            ..QuizSettingsDraft::new()
        })
        .unwrap_err();
        assert!(matches!(err, SessionError::Settings(_)));
    }
}
