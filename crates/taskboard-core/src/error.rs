use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
