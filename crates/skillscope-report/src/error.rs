use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("skills directory not found: {0}")]
    SourceDirMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required file: {0}")]
    MissingFile(PathBuf),

    #[error("{path}: not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}: \"skills\" must be an array")]
    SkillsNotArray(PathBuf),

    #[error("{path}: skill entry {index} has a missing or empty \"{field}\"")]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
