//! TOML configuration with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Conventional install location scanned when nothing else is configured.
pub const DEFAULT_SKILLS_ROOT: &str = "/usr/local/share/skillscope/skills";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skills: SkillsConfig,
    pub publish: PublishConfig,
    pub viewer: ViewerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Root directory whose immediate subdirectories are skills.
    pub root: PathBuf,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_SKILLS_ROOT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Every sink receives the identical serialized report.
    pub sinks: Vec<PathBuf>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            sinks: vec![
                PathBuf::from("web/skills.json"),
                PathBuf::from("docs/skills.json"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Report source: an `http(s)://` URL or a local file path.
    pub source: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            source: "web/skills.json".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Candidate URLs tried in order; the first success wins.
    pub urls: Vec<String>,
    /// Bound on each candidate attempt, in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://clawhub.ai/skills.json".to_owned(),
                "https://clawhub.ai/api/skills.json".to_owned(),
                "https://clawhub.ai/community-skills.json".to_owned(),
            ],
            timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Self>(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("SKILLSCOPE_SKILLS_DIR")
            && !root.is_empty()
        {
            self.skills.root = PathBuf::from(root);
        }
    }
}
