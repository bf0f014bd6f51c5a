//! Token manager with single-flight refresh
//!
//! Owns the [`TokenStore`] and the refresh client. Refreshes are serialized
//! behind one async mutex; a caller that got a 401 passes the generation it
//! observed, and if the store already moved on the refresh is skipped.

use std::sync::Arc;

use msfchat_domain::TokenPair;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use super::client::OAuthClientError;
use super::token_store::{TokenSnapshot, TokenStore};
use super::traits::RefreshClientTrait;
use super::types::RefreshOutcome;

/// Error type for token manager operations
#[derive(Debug)]
pub enum TokenManagerError {
    /// OAuth operation failed
    OAuthError(OAuthClientError),
}

impl std::fmt::Display for TokenManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OAuthError(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TokenManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OAuthError(e) => Some(e),
        }
    }
}

impl From<OAuthClientError> for TokenManagerError {
    fn from(err: OAuthClientError) -> Self {
        Self::OAuthError(err)
    }
}

/// Token manager shared by every fetcher
///
/// 1. Hands out the current access token with its generation
/// 2. Performs at most one refresh at a time
/// 3. Leaves the store untouched when a refresh fails
pub struct TokenManager<C: RefreshClientTrait + 'static> {
    refresh_client: Arc<C>,
    store: Arc<TokenStore>,
    refresh_lock: Mutex<()>,
}

impl<C: RefreshClientTrait + 'static> TokenManager<C> {
    /// Create a token manager seeded with the startup credentials
    #[must_use]
    pub fn new(refresh_client: C, initial: TokenPair) -> Self {
        Self::with_store(refresh_client, Arc::new(TokenStore::new(initial)))
    }

    /// Create a token manager over an existing store
    #[must_use]
    pub fn with_store(refresh_client: C, store: Arc<TokenStore>) -> Self {
        Self { refresh_client: Arc::new(refresh_client), store, refresh_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Current access token and the generation it belongs to
    pub async fn access_snapshot(&self) -> TokenSnapshot {
        self.store.snapshot().await
    }

    /// Refresh against whatever generation is current right now
    ///
    /// # Errors
    /// Returns error if the token endpoint call fails
    pub async fn refresh_tokens(&self) -> Result<RefreshOutcome, TokenManagerError> {
        let observed = self.store.generation().await;
        self.refresh_after(observed).await
    }

    /// Refresh unless the store moved past `observed_generation`
    ///
    /// Exactly one token endpoint call is made per `Refreshed` outcome. On
    /// failure the store keeps its previous pair.
    ///
    /// # Errors
    /// Returns error if the token endpoint call fails
    #[instrument(skip(self), fields(token_url = %self.refresh_client.token_url()))]
    pub async fn refresh_after(
        &self,
        observed_generation: u64,
    ) -> Result<RefreshOutcome, TokenManagerError> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.store.generation().await;
        if current != observed_generation {
            debug!(current, "Token already refreshed by another caller");
            return Ok(RefreshOutcome::Coalesced);
        }

        let refresh_token = self.store.current_refresh_token().await;
        match self.refresh_client.refresh_access_token(&refresh_token).await {
            Ok(response) => {
                let rotated = response.rotates_refresh_token();
                let generation = self.store.replace(response.into_token_pair(refresh_token)).await;
                info!(generation, rotated, "Successfully refreshed access token");
                Ok(RefreshOutcome::Refreshed)
            }
            Err(e) => {
                error!(error = %e, "Token refresh failed");
                Err(e.into())
            }
        }
    }
}
