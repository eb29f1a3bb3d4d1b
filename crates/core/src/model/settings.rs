use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a celebration stays visible unless configured otherwise.
pub const DEFAULT_CELEBRATION_MS: u64 = 4_000;
/// Upper bound accepted for `celebration_duration_ms`.
pub const MAX_CELEBRATION_MS: u64 = 60_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("celebration duration must be between 1 and {max} ms, got {got}")]
    CelebrationDuration { got: u64, max: u64 },
}

/// Unvalidated quiz settings, as loaded from a host configuration.
///
/// Every field is optional; missing values fall back to the defaults of
/// `QuizSettings::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizSettingsDraft {
    pub shuffle_questions: Option<bool>,
    pub shuffle_options: Option<bool>,
    pub seed: Option<u64>,
    pub celebration_duration_ms: Option<u64>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::CelebrationDuration` if the duration is zero or
    /// above `MAX_CELEBRATION_MS`.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let defaults = QuizSettings::default();
        let celebration_duration_ms = self
            .celebration_duration_ms
            .unwrap_or(defaults.celebration_duration_ms);

        if celebration_duration_ms == 0 || celebration_duration_ms > MAX_CELEBRATION_MS {
            return Err(SettingsError::CelebrationDuration {
                got: celebration_duration_ms,
                max: MAX_CELEBRATION_MS,
            });
        }

        Ok(QuizSettings {
            shuffle_questions: self.shuffle_questions.unwrap_or(defaults.shuffle_questions),
            shuffle_options: self.shuffle_options.unwrap_or(defaults.shuffle_options),
            seed: self.seed,
            celebration_duration_ms,
        })
    }
}

/// Validated settings for a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    shuffle_questions: bool,
    shuffle_options: bool,
    seed: Option<u64>,
    celebration_duration_ms: u64,
}

impl QuizSettings {
    /// Settings with both shuffles disabled.
    ///
    /// Questions keep source order and options keep record order, which
    /// makes a session fully deterministic.
    #[must_use]
    pub fn fixed_order() -> Self {
        Self {
            shuffle_questions: false,
            shuffle_options: false,
            ..Self::default()
        }
    }

    /// Seed the randomizer so a session can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn shuffle_questions(&self) -> bool {
        self.shuffle_questions
    }

    #[must_use]
    pub fn shuffle_options(&self) -> bool {
        self.shuffle_options
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn celebration_duration_ms(&self) -> u64 {
        self.celebration_duration_ms
    }

    #[must_use]
    pub fn celebration_duration(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.celebration_duration_ms).unwrap_or(i64::MAX))
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            shuffle_questions: true,
            shuffle_options: true,
            seed: None,
            celebration_duration_ms: DEFAULT_CELEBRATION_MS,
        }
    }
}
