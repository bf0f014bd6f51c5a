//! In-memory Token Store
//!
//! Holds the current access/refresh pair for the lifetime of the process.
//! Every replacement bumps a generation counter, so a caller holding a
//! rejected token can tell whether someone else already refreshed it.

use msfchat_domain::{SecretString, TokenPair};
use tokio::sync::RwLock;

/// Access token together with the generation it was read at
#[derive(Debug, Clone)]
pub struct TokenSnapshot {
    pub access_token: SecretString,
    pub generation: u64,
}

#[derive(Debug)]
struct TokenState {
    pair: TokenPair,
    generation: u64,
}

/// Shared token pair; written only by the token manager
#[derive(Debug)]
pub struct TokenStore {
    state: RwLock<TokenState>,
}

impl TokenStore {
    /// Create a store seeded with the startup credentials (generation 0)
    #[must_use]
    pub fn new(initial: TokenPair) -> Self {
        Self { state: RwLock::new(TokenState { pair: initial, generation: 0 }) }
    }

    pub async fn current_access_token(&self) -> SecretString {
        self.state.read().await.pair.access_token.clone()
    }

    pub async fn current_refresh_token(&self) -> SecretString {
        self.state.read().await.pair.refresh_token.clone()
    }

    /// Read the access token and generation under one lock
    pub async fn snapshot(&self) -> TokenSnapshot {
        let state = self.state.read().await;
        TokenSnapshot { access_token: state.pair.access_token.clone(), generation: state.generation }
    }

    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Swap in a new pair and return the new generation
    pub(crate) async fn replace(&self, pair: TokenPair) -> u64 {
        let mut state = self.state.write().await;
        state.pair = pair;
        state.generation += 1;
        state.generation
    }
}
