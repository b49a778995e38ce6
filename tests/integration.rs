//! End-to-end: scan a skills tree, publish, and validate the artifact.

use std::path::Path;

use skillscope_report::model::DEFAULT_DESCRIPTION;
use skillscope_report::{Band, RiskLevel, scan, sink, validate};

fn write_skill(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn alpha_body() -> String {
    format!(
        "# Alpha\n\nThis skill organizes release notes into tidy sections.\n\n\
         ## Example\n\nIt must keep every note in its original order.\n\n\
         ```\nalpha --plan notes.md\n```\n\n{}",
        "It walks the notes, groups them by theme, and writes a digest. ".repeat(8)
    )
}

#[test]
fn generate_publish_validate_round_trip() {
    let skills_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    write_skill(skills_dir.path(), "alpha", &alpha_body());
    write_skill(
        skills_dir.path(),
        "risky",
        "# Risky\n\nA skill that cleans caches aggressively when asked to.\n\n\
         Run `sudo rm -rf /var/cache/app` to reset.\n",
    );
    std::fs::create_dir(skills_dir.path().join("bare")).unwrap();

    let report = scan::generate(skills_dir.path()).unwrap();
    assert_eq!(report.count, 3);
    let names: Vec<&str> = report.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["alpha", "bare", "risky"]);

    let alpha = &report.skills[0];
    assert_eq!(alpha.quality_score, 100);
    assert_eq!(alpha.security_score, 100);
    assert_eq!(alpha.overall_score, 100);
    assert_eq!(alpha.band, Band::Excellent);
    assert_eq!(alpha.security_risk, RiskLevel::Low);
    assert_eq!(alpha.security_findings.len(), 1);

    let bare = &report.skills[1];
    assert!(!bare.has_skill_file);
    assert_eq!(bare.description, DEFAULT_DESCRIPTION);
    assert_eq!(bare.quality_score, 0);
    assert_eq!(bare.security_score, 100);

    let risky = &report.skills[2];
    // destructive delete (25) + sudo (10), no safety language
    assert_eq!(risky.security_score, 65);
    assert_eq!(risky.security_risk, RiskLevel::Medium);
    assert!(risky.has_skill_file);

    let primary = out_dir.path().join("web/skills.json");
    let mirror = out_dir.path().join("docs/skills.json");
    sink::publish(&report, &[&primary, &mirror]).unwrap();

    assert_eq!(
        std::fs::read(&primary).unwrap(),
        std::fs::read(&mirror).unwrap()
    );

    let count = validate::validate(&[&primary, &mirror]).unwrap();
    assert_eq!(count, 3);
}

#[test]
fn report_scores_match_direct_scorer_output() {
    let skills_dir = tempfile::tempdir().unwrap();
    let body = "# Beta\n\nShort body with an example.\n";
    write_skill(skills_dir.path(), "beta", body);

    let report = scan::generate(skills_dir.path()).unwrap();
    let quality = skillscope_score::quality::assess(body);
    let security = skillscope_score::security::assess(body);

    assert_eq!(report.skills[0].quality_score, quality.score);
    assert_eq!(report.skills[0].security_score, security.score);
}

#[test]
fn empty_root_publishes_empty_report() {
    let skills_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let report = scan::generate(skills_dir.path()).unwrap();
    assert_eq!(report.count, 0);
    assert_eq!(report.summary.avg_overall, 0);
    assert_eq!(report.summary.avg_quality, 0);
    assert_eq!(report.summary.avg_security, 0);

    let sink_path = out_dir.path().join("skills.json");
    sink::publish(&report, &[&sink_path]).unwrap();
    assert_eq!(validate::validate(&[&sink_path]).unwrap(), 0);
}

#[test]
fn missing_root_writes_no_report() {
    let out_dir = tempfile::tempdir().unwrap();
    let sink_path = out_dir.path().join("skills.json");

    let result = scan::generate(Path::new("/nonexistent/skills"));
    assert!(result.is_err());
    // Nothing was published, so validation still fails.
    assert!(validate::validate(&[&sink_path]).is_err());
}

#[test]
fn tampered_artifact_fails_validation() {
    let skills_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    write_skill(skills_dir.path(), "alpha", &alpha_body());

    let report = scan::generate(skills_dir.path()).unwrap();
    let sink_path = out_dir.path().join("skills.json");
    sink::publish(&report, &[&sink_path]).unwrap();

    let mut raw = std::fs::read_to_string(&sink_path).unwrap();
    raw = raw.replace("\"name\": \"alpha\"", "\"name\": \"\"");
    std::fs::write(&sink_path, raw).unwrap();

    assert!(validate::validate(&[&sink_path]).is_err());
}
