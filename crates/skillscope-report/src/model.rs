//! Report data model. Field names serialize in camelCase to match the
//! published `skills.json` artifact.

use std::fmt;

use serde::{Deserialize, Serialize};
use skillscope_score::{QualityAssessment, SecurityAssessment};

/// Fallback when no description line qualifies or the file is absent.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Strength and gap lists are capped at this many notes.
const NOTE_LIMIT: usize = 4;

/// Coarse label derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Band {
    /// Thresholds are inclusive at the lower bound.
    #[must_use]
    pub fn from_overall(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70.. => Self::Good,
            50.. => Self::Fair,
            _ => Self::NeedsWork,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => f.write_str("excellent"),
            Self::Good => f.write_str("good"),
            Self::Fair => f.write_str("fair"),
            Self::NeedsWork => f.write_str("needs-work"),
        }
    }
}

/// Coarse label derived from the security score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn from_security(score: u8) -> Self {
        match score {
            85.. => Self::Low,
            65.. => Self::Medium,
            _ => Self::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Medium => f.write_str("medium"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Weighted overall score: quality 60%, security 40%, rounded to nearest.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn overall_score(quality: u8, security: u8) -> u8 {
    (f64::from(quality) * 0.6 + f64::from(security) * 0.4).round() as u8
}

/// One scored skill directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReport {
    pub name: String,
    pub location: String,
    pub description: String,
    pub has_skill_file: bool,
    pub quality_score: u8,
    pub security_score: u8,
    pub overall_score: u8,
    pub band: Band,
    pub security_risk: RiskLevel,
    pub strengths: Vec<String>,
    pub quality_gaps: Vec<String>,
    pub security_findings: Vec<String>,
}

impl SkillReport {
    /// Assemble a skill entry from both scorer outcomes.
    #[must_use]
    pub fn from_assessments(
        name: String,
        location: String,
        description: String,
        has_skill_file: bool,
        quality: QualityAssessment,
        security: SecurityAssessment,
    ) -> Self {
        let overall = overall_score(quality.score, security.score);
        let mut strengths = quality.strengths;
        let mut quality_gaps = quality.gaps;
        strengths.truncate(NOTE_LIMIT);
        quality_gaps.truncate(NOTE_LIMIT);

        Self {
            name,
            location,
            description,
            has_skill_file,
            quality_score: quality.score,
            security_score: security.score,
            overall_score: overall,
            band: Band::from_overall(overall),
            security_risk: RiskLevel::from_security(security.score),
            strengths,
            quality_gaps,
            security_findings: security.findings,
        }
    }
}

/// Per-run aggregate means, rounded to the nearest integer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub avg_overall: u8,
    pub avg_quality: u8,
    pub avg_security: u8,
}

/// The whole-run artifact. Regenerated wholesale on each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// RFC 3339 UTC timestamp of generation.
    pub generated_at: String,
    pub source_dir: String,
    pub count: usize,
    pub summary: Summary,
    pub skills: Vec<SkillReport>,
}

impl Report {
    /// Build the aggregate report; `count` and `summary` are derived from
    /// the skill list.
    #[must_use]
    pub fn new(generated_at: String, source_dir: String, skills: Vec<SkillReport>) -> Self {
        let summary = Summary {
            avg_overall: mean(skills.iter().map(|s| s.overall_score)),
            avg_quality: mean(skills.iter().map(|s| s.quality_score)),
            avg_security: mean(skills.iter().map(|s| s.security_score)),
        };
        Self {
            generated_at,
            source_dir,
            count: skills.len(),
            summary,
            skills,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn mean(scores: impl ExactSizeIterator<Item = u8>) -> u8 {
    let n = scores.len();
    if n == 0 {
        return 0;
    }
    let sum: u32 = scores.map(u32::from).sum();
    (f64::from(sum) / n as f64).round() as u8
}
