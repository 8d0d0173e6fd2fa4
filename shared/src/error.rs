use thiserror::Error;

use crate::forms::FormError;
use crate::ServerErrorBody;

/// Everything that can go wrong between a user action and the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not build request: {0}")]
    Request(String),

    #[error("Server error {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] FormError),
}

impl ClientError {
    /// Build a server error from a non-2xx response body, pulling out the
    /// `message` field when the body is the backend's JSON error shape.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty());
        ClientError::Server { status, message }
    }

    /// Text for the transient banner. `fallback` describes the failed
    /// action; a server-supplied message is appended when present.
    pub fn banner_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Server { message: Some(message), .. } => format!("{}: {}", fallback, message),
            ClientError::Validation(error) => error.to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
