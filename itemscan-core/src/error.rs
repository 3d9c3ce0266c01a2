use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed bitmap: {0}")]
    MalformedBitmap(String),

    #[error("Invalid detection '{label}': {reason}")]
    InvalidDetection { label: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
