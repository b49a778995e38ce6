//! Heuristic scoring of `SKILL.md` documents.
//!
//! Two pure scorers over raw markdown text: [`quality::assess`] sums the
//! points of satisfied documentation checks, [`security::assess`] subtracts
//! penalties for matched risk patterns. Both are driven by the declarative
//! rule tables in [`rules`].

pub mod quality;
pub mod rules;
pub mod security;

pub use quality::QualityAssessment;
pub use security::SecurityAssessment;

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quality_score_stays_in_range(text in ".{0,2000}") {
            let result = crate::quality::assess(&text);
            prop_assert!(result.score <= 100);
            prop_assert_eq!(
                result.strengths.len() + result.gaps.len(),
                crate::rules::QUALITY_CHECKS.len()
            );
        }

        #[test]
        fn security_score_stays_in_range(text in ".{0,2000}") {
            let result = crate::security::assess(&text);
            prop_assert!(result.score <= 100);
            prop_assert!(result.findings.len() <= 6);
        }

        #[test]
        fn quality_score_is_sum_of_matched_points(text in ".{0,2000}") {
            let result = crate::quality::assess(&text);
            let expected: u32 = crate::rules::QUALITY_CHECKS
                .iter()
                .filter(|c| c.is_satisfied(&text))
                .map(|c| u32::from(c.points))
                .sum();
            prop_assert_eq!(u32::from(result.score), expected);
        }
    }
}
