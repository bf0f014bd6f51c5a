//! Bearer token access for the game API client

use async_trait::async_trait;
use msfchat_common::{
    RefreshClientTrait, RefreshOutcome, TokenManager, TokenManagerError, TokenSnapshot,
};

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token with the generation it was read at
    async fn access_token(&self) -> TokenSnapshot;

    /// Refresh the token pair unless it already moved past
    /// `observed_generation`
    async fn refresh(&self, observed_generation: u64) -> Result<RefreshOutcome, TokenManagerError>;
}

#[async_trait]
impl<C: RefreshClientTrait + 'static> AccessTokenProvider for TokenManager<C> {
    async fn access_token(&self) -> TokenSnapshot {
        self.access_snapshot().await
    }

    async fn refresh(
        &self,
        observed_generation: u64,
    ) -> Result<RefreshOutcome, TokenManagerError> {
        self.refresh_after(observed_generation).await
    }
}
