use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerzError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Invalid corpus data: {0}")]
    Serialization(serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("{0}")]
    Browse(String),
}

pub type Result<T> = std::result::Result<T, VerzError>;
