#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use sessions::{
    AnswerFeedback, Celebration, EngineState, LoadReport, MissedQuestion, QuizEngine, QuizSession,
    ResultTier, SessionPhase, SessionProgress, SessionReport, rounded_percentage,
};
