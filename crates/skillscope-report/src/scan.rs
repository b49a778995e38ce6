//! Directory scanning and report generation.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::error::ReportError;
use crate::model::{DEFAULT_DESCRIPTION, Report, SkillReport};

/// Scan `root` and produce the aggregate report.
///
/// Immediate subdirectories are the skills; anything else in the root is
/// ignored. A missing `SKILL.md` is scored as empty content, not an error.
///
/// # Errors
///
/// Returns [`ReportError::SourceDirMissing`] when the root does not exist,
/// or an IO error if a present `SKILL.md` cannot be read.
pub fn generate(root: &Path) -> Result<Report, ReportError> {
    if !root.is_dir() {
        return Err(ReportError::SourceDirMissing(root.to_path_buf()));
    }
    let root = absolutize(root)?;

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    // Case-insensitive lexicographic order, byte order as tiebreak.
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut skills = Vec::with_capacity(names.len());
    for name in names {
        skills.push(scan_skill(&root, name)?);
    }

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let report = Report::new(generated_at, root.to_string_lossy().into_owned(), skills);
    tracing::info!(
        count = report.count,
        source = %report.source_dir,
        "report generated"
    );
    Ok(report)
}

fn scan_skill(root: &Path, name: String) -> Result<SkillReport, ReportError> {
    let location = root.join(&name);
    let md_path = location.join("SKILL.md");

    let has_skill_file = md_path.is_file();
    let text = if has_skill_file {
        std::fs::read_to_string(&md_path)?
    } else {
        String::new()
    };

    let quality = skillscope_score::quality::assess(&text);
    let security = skillscope_score::security::assess(&text);

    Ok(SkillReport::from_assessments(
        name,
        location.to_string_lossy().into_owned(),
        description_of(&text),
        has_skill_file,
        quality,
        security,
    ))
}

/// First trimmed line that reads like prose: not a heading, fence, or list
/// item, and longer than 20 characters.
fn description_of(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with("```")
                && !line.starts_with("- ")
                && !line.starts_with("* ")
                && line.chars().count() > 20
        })
        .map_or_else(|| DEFAULT_DESCRIPTION.to_owned(), str::to_owned)
}

fn absolutize(path: &Path) -> Result<PathBuf, ReportError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Band, RiskLevel};

    fn write_skill(root: &Path, name: &str, content: &str) {
        let dir = root.join(name);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), content).unwrap();
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = generate(Path::new("/nonexistent/skills")).unwrap_err();
        assert!(matches!(err, ReportError::SourceDirMissing(_)));
    }

    #[test]
    fn empty_root_yields_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(dir.path()).unwrap();
        assert_eq!(report.count, 0);
        assert!(report.skills.is_empty());
        assert_eq!(report.summary.avg_overall, 0);
    }

    #[test]
    fn non_directory_entries_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "not a skill").unwrap();
        std::fs::create_dir(dir.path().join("real-skill")).unwrap();

        let report = generate(dir.path()).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.skills[0].name, "real-skill");
    }

    #[test]
    fn skills_sorted_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta", "Alpha", "beta"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        let report = generate(dir.path()).unwrap();
        let names: Vec<&str> = report.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn missing_skill_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bare")).unwrap();

        let report = generate(dir.path()).unwrap();
        let skill = &report.skills[0];
        assert!(!skill.has_skill_file);
        assert_eq!(skill.description, DEFAULT_DESCRIPTION);
        assert_eq!(skill.quality_score, 0);
        assert_eq!(skill.security_score, 100);
        assert_eq!(skill.security_risk, RiskLevel::Low);
        assert_eq!(skill.security_findings.len(), 1);
    }

    #[test]
    fn well_documented_safe_skill_scores_top_marks() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!(
            "# Alpha\n\nThis skill organizes release notes into tidy sections.\n\n\
             ## Example\n\nIt must keep every note in its original order.\n\n\
             ```\nalpha --plan notes.md\n```\n\n{}",
            "It walks the notes, groups them by theme, and writes a digest. ".repeat(8)
        );
        write_skill(dir.path(), "alpha", &body);

        let report = generate(dir.path()).unwrap();
        let skill = &report.skills[0];
        assert_eq!(skill.quality_score, 100);
        assert_eq!(skill.security_score, 100);
        assert_eq!(skill.overall_score, 100);
        assert_eq!(skill.band, Band::Excellent);
        assert_eq!(skill.security_risk, RiskLevel::Low);
        assert_eq!(
            skill.security_findings,
            vec!["No safety or permission language detected".to_owned()]
        );
        assert_eq!(report.summary.avg_overall, 100);
    }

    #[test]
    fn description_picks_first_prose_line() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(
            dir.path(),
            "documented",
            "# Title\n\n- a list item that is quite long\n\nshort\n\n\
             A proper description line that is long enough.\n",
        );
        let report = generate(dir.path()).unwrap();
        assert_eq!(
            report.skills[0].description,
            "A proper description line that is long enough."
        );
    }

    #[test]
    fn description_falls_back_when_nothing_qualifies() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(dir.path(), "terse", "# Title\n\ntiny\n");
        let report = generate(dir.path()).unwrap();
        assert_eq!(report.skills[0].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn locations_are_absolute() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("somewhere")).unwrap();
        let report = generate(dir.path()).unwrap();
        assert!(Path::new(&report.skills[0].location).is_absolute());
        assert!(report.skills[0].location.ends_with("somewhere"));
    }
}
