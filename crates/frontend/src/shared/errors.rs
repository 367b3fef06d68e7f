use thiserror::Error;

/// Failure of a call to the task store that did not produce an `ActionResponse`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {text}")]
    Status { status: u16, text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ActionError {
    pub fn status(status: u16, text: impl Into<String>) -> Self {
        ActionError::Status {
            status,
            text: text.into(),
        }
    }

    /// Inner text without the variant prefix
    pub fn detail(&self) -> &str {
        match self {
            ActionError::Network(text)
            | ActionError::Decode(text)
            | ActionError::Encode(text)
            | ActionError::Status { text, .. } => text,
        }
    }
}

/// Normalize an error into a user facing message, `fallback` when the
/// error has no text of its own.
pub fn error_message(error: &ActionError, fallback: &str) -> String {
    if error.detail().trim().is_empty() {
        fallback.to_string()
    } else {
        error.to_string()
    }
}
