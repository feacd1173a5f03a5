use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;
