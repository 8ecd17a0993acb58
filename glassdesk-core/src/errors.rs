use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown application: {0}")]
    UnknownApp(String),
    #[error("Unknown widget kind: {0}")]
    UnknownWidgetKind(String),
    #[error("Unknown notification severity: {0}")]
    UnknownSeverity(String),
    #[error("Store error: {0}")]
    Store(String),
}
