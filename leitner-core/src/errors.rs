use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("persisted progress unreadable: {0}")]
    PersistenceRead(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("duplicate question: {0}")]
    DuplicateQuestion(String),
}
