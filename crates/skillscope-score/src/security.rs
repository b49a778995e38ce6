//! Textual security-risk scoring.

use crate::rules::{NO_SAFETY_FINDING, RISK_PATTERNS, SAFETY_BONUS, SAFETY_LANGUAGE};

/// Findings are capped at this many entries, in pattern-check order.
const FINDINGS_LIMIT: usize = 6;

/// Outcome of running the risk rule table over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityAssessment {
    /// 100 minus matched penalties, plus the safety bonus, clamped to 0..=100.
    pub score: u8,
    /// One finding per matched pattern, plus the safety-absence note.
    pub findings: Vec<String>,
}

/// Score a markdown document against the risk rule table.
///
/// Every pattern is evaluated independently; a document can trip all of them.
/// The safety-absence note never changes the score, it only adds a finding.
#[must_use]
pub fn assess(text: &str) -> SecurityAssessment {
    let mut score = 100i32;
    let mut findings = Vec::new();

    for risk in RISK_PATTERNS.iter() {
        if risk.pattern.is_match(text) {
            score -= i32::from(risk.penalty);
            findings.push(risk.finding.to_owned());
        }
    }

    if SAFETY_LANGUAGE.is_match(text) {
        score += i32::from(SAFETY_BONUS);
    } else {
        findings.push(NO_SAFETY_FINDING.to_owned());
    }

    findings.truncate(FINDINGS_LIMIT);

    let score = u8::try_from(score.clamp(0, 100)).unwrap_or(100);
    SecurityAssessment { score, findings }
}
