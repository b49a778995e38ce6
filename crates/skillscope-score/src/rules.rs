//! Declarative rule tables driving both scorers.
//!
//! Each rule is an ordered record of pattern, weight, and note so that rules
//! stay independently testable and extensible. Tables are evaluated top to
//! bottom; every rule fires independently of the others.

use std::sync::LazyLock;

use regex::Regex;

/// How a quality check inspects the document.
#[derive(Debug)]
pub enum Signal {
    /// Matches anywhere in the text.
    Pattern(Regex),
    /// Total character count strictly greater than the threshold.
    MinLength(usize),
}

/// One additive documentation-quality check.
#[derive(Debug)]
pub struct QualityCheck {
    pub signal: Signal,
    pub points: u8,
    pub strength: &'static str,
    pub gap: &'static str,
}

impl QualityCheck {
    #[must_use]
    pub fn is_satisfied(&self, text: &str) -> bool {
        match &self.signal {
            Signal::Pattern(re) => re.is_match(text),
            Signal::MinLength(min) => text.chars().count() > *min,
        }
    }
}

/// One subtractive security-risk pattern.
#[derive(Debug)]
pub struct RiskPattern {
    pub pattern: Regex,
    pub penalty: u8,
    pub finding: &'static str,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule table patterns are valid")
}

/// Documentation-quality checks, in report order. Points sum to 100.
pub static QUALITY_CHECKS: LazyLock<Vec<QualityCheck>> = LazyLock::new(|| {
    vec![
        QualityCheck {
            signal: Signal::Pattern(re(r"(?m)^#\s+\S")),
            points: 20,
            strength: "Has a top-level title heading",
            gap: "Missing a top-level title heading",
        },
        QualityCheck {
            signal: Signal::Pattern(re(r"(?i)\busage\b|\bexample|\bhow to\b|\bquick\s*start\b")),
            points: 20,
            strength: "Documents usage or examples",
            gap: "No usage or example guidance",
        },
        QualityCheck {
            signal: Signal::Pattern(re(r"(?m)^##\s")),
            points: 15,
            strength: "Organized into sub-sections",
            gap: "No sub-section structure",
        },
        QualityCheck {
            signal: Signal::Pattern(re(
                r"(?i)\bconstraint|\bdo not\b|\bmust\b|\bnever\b|\brequired\b",
            )),
            points: 20,
            strength: "Documents constraints and boundaries",
            gap: "No constraints or boundaries documented",
        },
        QualityCheck {
            signal: Signal::Pattern(re("```")),
            points: 15,
            strength: "Includes command or code snippets",
            gap: "No command or code snippets",
        },
        QualityCheck {
            signal: Signal::MinLength(400),
            points: 10,
            strength: "Sufficient documentation depth",
            gap: "Documentation is very short",
        },
    ]
});

/// Security-risk patterns, in finding order.
pub static RISK_PATTERNS: LazyLock<Vec<RiskPattern>> = LazyLock::new(|| {
    vec![
        RiskPattern {
            pattern: re(r"(?i)\brm\s+-(?:[a-z]*r[a-z]*f|[a-z]*f[a-z]*r)[a-z]*\b"),
            penalty: 25,
            finding: "Contains a destructive delete command",
        },
        RiskPattern {
            pattern: re(r"(?i)\b(?:curl|wget)\b[^|\n]*\|\s*(?:ba|z|da)?sh\b"),
            penalty: 25,
            finding: "Pipes a remote download into a shell",
        },
        RiskPattern {
            pattern: re(r"(?i)\bsudo\b"),
            penalty: 10,
            finding: "Invokes elevated privileges (sudo)",
        },
        RiskPattern {
            pattern: re(r"(?i)\beval\b|\bexec\b"),
            penalty: 8,
            finding: "Uses dynamic code execution keywords",
        },
        RiskPattern {
            pattern: re(r"(?i)\bpassword\b|\bsecret\b|\btoken\b|\bapi[_\s-]?key\b|\bcredential"),
            penalty: 6,
            finding: "References sensitive credentials",
        },
        RiskPattern {
            pattern: re(r"(?i)https?://|\bcurl\b|\bwget\b|\bssh\b|\bscp\b"),
            penalty: 6,
            finding: "Touches external or network resources",
        },
    ]
});

/// Safety/permission language worth a score bonus when present.
pub static SAFETY_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\bconfirm|\bapproval\b|\bpermission\b|read[\s-]?only|non[\s-]?destructive|dry[\s-]?run")
});

/// Bonus applied when safety language is present.
pub const SAFETY_BONUS: u8 = 8;

/// Finding recorded when no safety language is found. Informational only.
pub const NO_SAFETY_FINDING: &str = "No safety or permission language detected";
