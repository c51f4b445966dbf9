use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaruError {
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },
    #[error("Session expired: {id}")]
    SessionExpired { id: String },
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Pending queue full for session: {id}")]
    QueueFull { id: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MaruError>;
