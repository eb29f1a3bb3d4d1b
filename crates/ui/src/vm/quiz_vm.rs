use chrono::{DateTime, Utc};
use quiz_core::model::QuizSettings;
use services::{Celebration, EngineState, LoadReport, QuizEngine, SessionError};

use super::question_vm::{QuestionVm, map_question};
use super::results_vm::{ResultsVm, map_results};
use crate::state::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Selected { is_correct: bool },
    Continue,
    Finished,
    Restarted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Loading,
    Question(QuestionVm),
    Results(ResultsVm),
}

/// Presenter-side handle on a quiz engine.
///
/// Holds the last celebration so a renderer can show it until it expires;
/// moving to another question or restarting drops it.
#[derive(Debug)]
pub struct QuizVm {
    engine: QuizEngine,
    celebration: Option<Celebration>,
}

impl QuizVm {
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self::from_engine(QuizEngine::new(settings))
    }

    #[must_use]
    pub fn from_engine(engine: QuizEngine) -> Self {
        Self {
            engine,
            celebration: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// # Errors
    ///
    /// Returns `ViewError::EmptyBank` when no question could be parsed.
    /// Returns `ViewError::Unknown` for other failures.
    pub fn load(&mut self, text: &str) -> Result<LoadReport, ViewError> {
        match self.engine.initialize(text) {
            Ok(report) => Ok(report),
            Err(SessionError::EmptyBank { .. }) => Err(ViewError::EmptyBank),
            Err(err) => Err(unknown(&err)),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the intent does not fit the current
    /// state, e.g. `Next` before any option was selected.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(display_index) => {
                let feedback = self
                    .engine
                    .select_answer(display_index)
                    .map_err(|err| unknown(&err))?;
                self.celebration = feedback.celebration;
                Ok(QuizOutcome::Selected {
                    is_correct: feedback.is_correct,
                })
            }
            QuizIntent::Next => {
                let state = self.engine.advance().map_err(|err| unknown(&err))?;
                self.celebration = None;
                Ok(match state {
                    EngineState::Finished => QuizOutcome::Finished,
                    EngineState::InProgress | EngineState::Loading => QuizOutcome::Continue,
                })
            }
            QuizIntent::Restart => {
                self.engine.reset().map_err(|err| unknown(&err))?;
                self.celebration = None;
                Ok(QuizOutcome::Restarted)
            }
        }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        let Some(session) = self.engine.session() else {
            return QuizScreen::Loading;
        };
        match map_question(session) {
            Some(question) => QuizScreen::Question(question),
            None => QuizScreen::Results(map_results(&session.report())),
        }
    }

    #[must_use]
    pub fn is_celebrating(&self, now: DateTime<Utc>) -> bool {
        self.celebration
            .is_some_and(|celebration| celebration.is_active(now))
    }
}

fn unknown(err: &SessionError) -> ViewError {
    tracing::error!(error = %err, "quiz intent rejected");
    ViewError::Unknown
}
