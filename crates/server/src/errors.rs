use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("audit log unavailable: {0}")]
    Audit(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
