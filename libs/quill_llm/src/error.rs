use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("API returned error status: {status}, body: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LLMError {
    /// Classifies a non-success HTTP status returned by a provider.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => LLMError::Auth { status, body },
            _ => LLMError::Api { status, body },
        }
    }
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LLMError::MalformedResponse(err.to_string())
        } else {
            LLMError::Network(err.to_string())
        }
    }
}
