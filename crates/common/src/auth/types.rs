//! Token endpoint types
//!
//! Wire structures for the identity provider's refresh response and error
//! body, plus the outcome reported by the token manager.

use std::fmt;

use msfchat_domain::{SecretString, TokenPair};
use serde::Deserialize;

/// Token endpoint success response
///
/// Only `access_token` is required. Extra fields are ignored. A missing
/// `refresh_token` means the provider did not rotate it.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: SecretString,
    #[serde(default)]
    pub refresh_token: Option<SecretString>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    #[must_use]
    pub fn new(access_token: impl Into<SecretString>, refresh_token: Option<&str>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.map(SecretString::from),
            token_type: Some("Bearer".to_string()),
            expires_in: None,
            scope: None,
        }
    }

    /// Build the next token pair, keeping `previous_refresh` when the
    /// response did not carry a new refresh token
    #[must_use]
    pub fn into_token_pair(self, previous_refresh: SecretString) -> TokenPair {
        let refresh_token = match self.refresh_token {
            Some(rotated) if !rotated.is_empty() => rotated,
            _ => previous_refresh,
        };
        TokenPair { access_token: self.access_token, refresh_token }
    }

    /// Whether the provider rotated the refresh token
    #[must_use]
    pub fn rotates_refresh_token(&self) -> bool {
        self.refresh_token.as_ref().is_some_and(|token| !token.is_empty())
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &self.access_token)
            .field("refresh_token", &self.refresh_token)
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// OAuth error response from the identity provider (RFC 6749 §5.2)
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthError {
    pub error: String,
    pub error_description: Option<String>,
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for OAuthError {}

/// What a refresh request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The token endpoint was called and the store now holds a new pair
    Refreshed,
    /// Another caller refreshed after the observed generation; no network call
    Coalesced,
}
