use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoctransError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {0} bytes")]
    FileTooLarge(u64),

    #[error("No text to translate")]
    EmptyText,

    #[error("Translation service error: {0}")]
    Api(String),

    #[error("A request is already in flight")]
    Busy,
}

pub type Result<T> = std::result::Result<T, DoctransError>;
