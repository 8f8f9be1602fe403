use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlimError {
    #[error("Source unavailable: {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("No backup found for {path}")]
    NoBackup { path: String },
    #[error("Invalid pattern in template '{label}': {reason}")]
    InvalidPattern { label: String, reason: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SlimError>;
