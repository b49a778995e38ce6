//! Skill report generation and publishing.
//!
//! [`scan::generate`] walks a skills root and scores every subdirectory's
//! `SKILL.md`, [`sink::publish`] writes the artifact to N byte-identical
//! sinks, and [`validate::validate`] checks a published artifact.

pub mod config;
pub mod error;
pub mod model;
pub mod scan;
pub mod sink;
pub mod validate;

pub use config::Config;
pub use error::{ReportError, ValidationError};
pub use model::{Band, Report, RiskLevel, SkillReport, Summary};
