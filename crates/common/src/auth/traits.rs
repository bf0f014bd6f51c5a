//! Traits for token refresh
//!
//! Abstracts the identity provider so the token manager can be tested with
//! mock implementations.

use async_trait::async_trait;
use msfchat_domain::SecretString;

use super::client::OAuthClientError;
use super::types::TokenResponse;

/// Trait for refresh-token exchanges
#[async_trait]
pub trait RefreshClientTrait: Send + Sync {
    /// Exchange a refresh token for a new token response
    ///
    /// # Errors
    /// Returns error if the exchange fails or the token is invalid/revoked
    async fn refresh_access_token(
        &self,
        refresh_token: &SecretString,
    ) -> Result<TokenResponse, OAuthClientError>;

    /// Token endpoint this client talks to
    fn token_url(&self) -> &str;
}
