#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
