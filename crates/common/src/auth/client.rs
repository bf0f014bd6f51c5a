//! Refresh-token client for the identity provider
//!
//! Performs the `grant_type=refresh_token` exchange against the configured
//! token endpoint. The authorization-code flow happens outside this process;
//! only refresh is supported here.

use std::time::Duration;

use async_trait::async_trait;
use msfchat_domain::{IdentityConfig, SecretString};
use reqwest::Client;
use tracing::debug;

use super::traits::RefreshClientTrait;
use super::types::{OAuthError, TokenResponse};

/// Longest error body kept in [`OAuthClientError::HttpStatus`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Error type for OAuth client operations
#[derive(Debug)]
pub enum OAuthClientError {
    /// HTTP request failed
    RequestFailed(reqwest::Error),

    /// Token endpoint returned an OAuth error body
    OAuthError(OAuthError),

    /// Token endpoint returned a non-success status without an OAuth body
    HttpStatus { status: u16, body: String },

    /// Failed to parse response
    ParseError(String),

    /// No refresh token available
    NoRefreshToken,

    /// HTTP client could not be constructed
    ClientBuild(reqwest::Error),
}

impl std::fmt::Display for OAuthClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::OAuthError(e) => write!(f, "OAuth error: {e}"),
            Self::HttpStatus { status, body } if body.is_empty() => {
                write!(f, "Token endpoint returned status {status}")
            }
            Self::HttpStatus { status, body } => {
                write!(f, "Token endpoint returned status {status}: {body}")
            }
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::NoRefreshToken => write!(f, "No refresh token available"),
            Self::ClientBuild(e) => write!(f, "Failed to build HTTP client: {e}"),
        }
    }
}

impl std::error::Error for OAuthClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestFailed(e) | Self::ClientBuild(e) => Some(e),
            Self::OAuthError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OAuthClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err)
    }
}

/// Identity provider client for refresh-token grants
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: IdentityConfig,
    client: Client,
}

impl OAuthClient {
    /// Create a new client with the given identity settings and request
    /// timeout
    ///
    /// System proxy settings are ignored when `disable_proxy` is true.
    ///
    /// # Errors
    /// Returns [`OAuthClientError::ClientBuild`] if the HTTP client cannot be
    /// constructed
    pub fn new(
        config: IdentityConfig,
        timeout: Duration,
        disable_proxy: bool,
    ) -> Result<Self, OAuthClientError> {
        let mut builder = Client::builder().timeout(timeout);
        if disable_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(OAuthClientError::ClientBuild)?;

        Ok(Self { config, client })
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// Sends one form-encoded POST with `grant_type`, `refresh_token`,
    /// `client_id` and `client_secret`. Never retries.
    ///
    /// # Errors
    /// Returns error if:
    /// - No refresh token provided
    /// - The request fails or times out
    /// - The token endpoint answers with a non-success status
    /// - The success body is not a token response
    pub async fn refresh_access_token(
        &self,
        refresh_token: &SecretString,
    ) -> Result<TokenResponse, OAuthClientError> {
        if refresh_token.is_empty() {
            return Err(OAuthClientError::NoRefreshToken);
        }

        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.expose()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose()),
        ];

        let response = self.client.post(&self.config.token_url).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Token endpoint rejected refresh");
            return Err(match serde_json::from_str::<OAuthError>(&body) {
                Ok(error) => OAuthClientError::OAuthError(error),
                Err(_) => OAuthClientError::HttpStatus {
                    status: status.as_u16(),
                    body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                },
            });
        }

        response.json::<TokenResponse>().await.map_err(|e| OAuthClientError::ParseError(e.to_string()))
    }

    /// Get the configured token endpoint
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.config.token_url
    }
}

#[async_trait]
impl RefreshClientTrait for OAuthClient {
    async fn refresh_access_token(
        &self,
        refresh_token: &SecretString,
    ) -> Result<TokenResponse, OAuthClientError> {
        self.refresh_access_token(refresh_token).await
    }

    fn token_url(&self) -> &str {
        self.token_url()
    }
}
