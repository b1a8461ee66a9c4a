use thiserror::Error;

pub type Result<T> = std::result::Result<T, MediabankError>;

#[derive(Debug, Error)]
pub enum MediabankError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MediabankError {
    fn from(err: reqwest::Error) -> Self {
        MediabankError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for MediabankError {
    fn from(err: serde_json::Error) -> Self {
        MediabankError::Parse(err.to_string())
    }
}
