use quiz_core::model::QuestionRecord;

/// Coarse grading of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl ResultTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => Self::Perfect,
            80..=99 => Self::Great,
            60..=79 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }
}

/// A missed question as shown in the final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedQuestion {
    pub prompt: String,
    pub correct_answer: String,
}

impl From<&QuestionRecord> for MissedQuestion {
    fn from(question: &QuestionRecord) -> Self {
        Self {
            prompt: question.prompt().to_owned(),
            correct_answer: question.correct_option().to_owned(),
        }
    }
}

/// Final report for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub score: usize,
    pub total: usize,
    /// `score / total` as a percentage, rounded half up.
    pub percentage: u32,
    pub tier: ResultTier,
    pub missed: Vec<MissedQuestion>,
}

impl SessionReport {
    #[must_use]
    pub fn new(score: usize, total: usize, missed: &[QuestionRecord]) -> Self {
        let percentage = rounded_percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
            missed: missed.iter().map(MissedQuestion::from).collect(),
        }
    }
}

/// `part / total` as a percentage, rounded half up; zero when `total` is zero.
#[must_use]
pub fn rounded_percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (part.saturating_mul(200) + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(0, 3), 0);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(5, 5), 100);
        assert_eq!(rounded_percentage(0, 0), 0);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ResultTier::from_percentage(100), ResultTier::Perfect);
        assert_eq!(ResultTier::from_percentage(99), ResultTier::Great);
        assert_eq!(ResultTier::from_percentage(80), ResultTier::Great);
        assert_eq!(ResultTier::from_percentage(79), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(60), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(59), ResultTier::KeepPracticing);
    }

    #[test]
    fn report_lists_missed_with_correct_text() {
        let question = QuestionRecord::new(
            "Largest planet?",
            ["Mars", "Jupiter", "Venus", "Earth"].map(String::from),
            "Jupiter",
        )
        .unwrap();
        let report = SessionReport::new(3, 4, &[question]);

        assert_eq!(report.percentage, 75);
        assert_eq!(report.tier, ResultTier::Good);
        assert_eq!(
            report.missed,
            vec![MissedQuestion {
                prompt: "Largest planet?".to_string(),
                correct_answer: "Jupiter".to_string(),
            }]
        );
    }
}
