use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClaudeError>;

#[derive(Debug, Error)]
pub enum ClaudeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

impl From<reqwest::Error> for ClaudeError {
    fn from(err: reqwest::Error) -> Self {
        ClaudeError::Network(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ClaudeError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ClaudeError::InvalidApiKey(err.to_string())
    }
}
