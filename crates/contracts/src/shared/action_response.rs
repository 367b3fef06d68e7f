use serde::{Deserialize, Serialize};

/// Result of a mutating call against the task store.
///
/// `error` set means the store rejected the operation; `message` optionally
/// replaces the client side success text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            message: None,
        }
    }

    /// Error text, ignoring blank strings
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }

    pub fn is_error(&self) -> bool {
        self.error_text().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_success() {
        let resp: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.is_error());
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_blank_error_is_not_an_error() {
        let resp = ActionResponse::failure("  ");
        assert!(!resp.is_error());
        assert!(ActionResponse::failure("boom").is_error());
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let json = serde_json::to_string(&ActionResponse::with_message("done")).unwrap();
        assert_eq!(json, r#"{"message":"done"}"#);
    }
}
