use services::{MissedQuestion, ResultTier, SessionReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage_label: String,
    pub score_label: String,
    pub tier: ResultTier,
    pub missed: Vec<MissedQuestion>,
}

impl From<&SessionReport> for ResultsVm {
    fn from(report: &SessionReport) -> Self {
        Self {
            percentage_label: format!("{}%", report.percentage),
            score_label: format!("{} / {} correct", report.score, report.total),
            tier: report.tier,
            missed: report.missed.clone(),
        }
    }
}

#[must_use]
pub fn map_results(report: &SessionReport) -> ResultsVm {
    ResultsVm::from(report)
}
