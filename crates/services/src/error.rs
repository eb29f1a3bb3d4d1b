//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SettingsError;

/// Errors emitted by quiz sessions.
///
/// Apart from `EmptyBank` and `Settings`, every variant is a broken caller
/// contract (an operation invoked in the wrong state or with a bad index).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question bank has no usable questions ({dropped} malformed records dropped)")]
    EmptyBank { dropped: usize },
    #[error("question bank has not been loaded")]
    NotLoaded,
    #[error("question bank is already loaded")]
    AlreadyLoaded,
    #[error("display index {index} is out of range for {len} options")]
    DisplayIndexOutOfRange { index: usize, len: usize },
    #[error("an answer is already selected for the current question")]
    AlreadyAnswered,
    #[error("no answer selected for the current question")]
    NoSelection,
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl SessionError {
    /// Returns true when the error reports a caller defect rather than a
    /// condition the user can see.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::EmptyBank { .. } | Self::Settings(_))
    }
}
