//! Documentation-quality scoring.

use crate::rules::QUALITY_CHECKS;

/// Outcome of running the quality rule table over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityAssessment {
    /// Sum of satisfied check points, 0..=100.
    pub score: u8,
    /// One note per satisfied check, in table order.
    pub strengths: Vec<String>,
    /// One note per unsatisfied check, in table order.
    pub gaps: Vec<String>,
}

/// Score a markdown document against the quality rule table.
///
/// Pure function of the input text; an absent file is scored as `""`.
#[must_use]
pub fn assess(text: &str) -> QualityAssessment {
    let mut score = 0u8;
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();

    for check in QUALITY_CHECKS.iter() {
        if check.is_satisfied(text) {
            score += check.points;
            strengths.push(check.strength.to_owned());
        } else {
            gaps.push(check.gap.to_owned());
        }
    }

    QualityAssessment {
        score,
        strengths,
        gaps,
    }
}
