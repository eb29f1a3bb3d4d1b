mod celebration;
mod progress;
mod report;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use celebration::Celebration;
pub use progress::SessionProgress;
pub use report::{MissedQuestion, ResultTier, SessionReport, rounded_percentage};
pub use service::{AnswerFeedback, QuizSession, SessionPhase};
pub use workflow::{EngineState, LoadReport, QuizEngine};
