use thiserror::Error;

/// Failure of a whole load. The `Display` text is what follows `Error: ` in
/// the error area.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("{0}")]
    Application(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// A file size that is not a non-negative integer byte count.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid size: {0}")]
pub struct InvalidSizeError(pub serde_json::Value);
