//! Game API fetch errors
//!
//! Display strings are what the assistant sees inside `{"error": ...}`.

use msfchat_domain::constants::MAX_RETRIES_REACHED;
use msfchat_domain::{FetchResult, MsfChatError};
use thiserror::Error;

/// Categories of fetch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorCategory {
    /// 401/403 - recovered by refreshing the token
    Authentication,
    /// Non-auth HTTP status or unusable body - never retried
    Upstream,
    /// Connection, timeout or transport failure - never retried
    Network,
    /// Token endpoint failure surfaced under the abort policy
    Refresh,
    /// Retry budget spent on auth rejections
    Exhausted,
    /// Client misconfiguration
    Config,
}

/// Game API fetch errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed with status code {status}")]
    Unauthorized { status: u16 },

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Network(String),

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),

    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    #[error("{}", MAX_RETRIES_REACHED)]
    MaxRetriesReached,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Get the error category for this error
    pub fn category(&self) -> FetchErrorCategory {
        match self {
            Self::Unauthorized { .. } => FetchErrorCategory::Authentication,
            Self::Status { .. } | Self::InvalidJson(_) => FetchErrorCategory::Upstream,
            Self::Network(_) => FetchErrorCategory::Network,
            Self::RefreshFailed(_) => FetchErrorCategory::Refresh,
            Self::MaxRetriesReached => FetchErrorCategory::Exhausted,
            Self::Config(_) => FetchErrorCategory::Config,
        }
    }

    /// Whether a token refresh followed by another attempt may succeed
    pub fn is_auth_rejection(&self) -> bool {
        self.category() == FetchErrorCategory::Authentication
    }

    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<FetchError> for FetchResult {
    fn from(error: FetchError) -> Self {
        FetchResult::error(error.to_string())
    }
}

impl From<FetchError> for MsfChatError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Config(message) => MsfChatError::Config(message),
            FetchError::Unauthorized { .. } | FetchError::RefreshFailed(_) => {
                MsfChatError::Auth(error.to_string())
            }
            FetchError::Network(message) => MsfChatError::Network(message),
            other => MsfChatError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_assistant_contract() {
        assert_eq!(
            FetchError::Status { status: 500 }.to_string(),
            "Request failed with status code 500"
        );
        assert_eq!(FetchError::MaxRetriesReached.to_string(), "Max Retries Reached");
        assert_eq!(
            FetchError::InvalidJson("expected value at line 1 column 1".into()).to_string(),
            "Invalid JSON in response: expected value at line 1 column 1"
        );
        assert_eq!(
            FetchError::RefreshFailed("OAuth error: invalid_grant".into()).to_string(),
            "Token refresh failed: OAuth error: invalid_grant"
        );
        assert_eq!(
            FetchError::Network("HTTP request timed out".into()).to_string(),
            "HTTP request timed out"
        );
    }

    #[test]
    fn only_401_and_403_are_auth_rejections() {
        assert!(FetchError::Unauthorized { status: 401 }.is_auth_rejection());
        assert!(!FetchError::Status { status: 404 }.is_auth_rejection());
        assert_eq!(FetchError::Status { status: 404 }.status_code(), Some(404));
        assert_eq!(FetchError::MaxRetriesReached.category(), FetchErrorCategory::Exhausted);
    }

    #[test]
    fn config_errors_keep_their_category() {
        let err: MsfChatError = FetchError::Config("invalid game API base URL".into()).into();
        assert_eq!(err, MsfChatError::Config("invalid game API base URL".into()));
    }

    #[test]
    fn converts_into_error_result() {
        let result: FetchResult = FetchError::Status { status: 502 }.into();
        assert_eq!(result.to_json_string(), r#"{"error":"Request failed with status code 502"}"#);
    }
}
