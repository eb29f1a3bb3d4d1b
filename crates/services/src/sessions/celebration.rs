use chrono::{DateTime, Duration, Utc};

/// Notification emitted when the selected answer is correct.
///
/// The engine keeps no record of it; a presenter may show an effect until
/// `expires_at` and then drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    triggered_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Celebration {
    #[must_use]
    pub fn starting_at(triggered_at: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            triggered_at,
            expires_at: triggered_at + duration,
        }
    }

    #[must_use]
    pub fn triggered_at(&self) -> DateTime<Utc> {
        self.triggered_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// True from the trigger instant up to, but excluding, the expiry.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now >= self.triggered_at && now < self.expires_at
    }
}
