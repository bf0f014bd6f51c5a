//! Fetcher results as handed back to the assistant

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload, serialized as `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    #[serde(rename = "error")]
    pub message: String,
}

/// Outcome of one fetcher invocation
///
/// Success carries the upstream JSON untouched. Serializes untagged, so the
/// assistant sees either the payload or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResult {
    Success(Value),
    Error(ErrorResult),
}

impl FetchResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorResult { message: message.into() })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(&err.message),
        }
    }

    pub fn into_json(self) -> Value {
        match self {
            Self::Success(payload) => payload,
            Self::Error(err) => serde_json::json!({ "error": err.message }),
        }
    }

    /// Compact JSON string as submitted back to the assistant
    pub fn to_json_string(&self) -> String {
        self.clone().into_json().to_string()
    }
}
