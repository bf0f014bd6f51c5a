//! Token lifecycle for the game API
//!
//! The game API authorizes every request with a short-lived bearer token.
//! When it expires the fetchers ask the [`TokenManager`] to exchange the
//! refresh token for a new pair at the identity provider.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  TokenManager   │  Single-flight refresh orchestrator
//! └────────┬────────┘
//!          │
//!          ├──► RefreshClientTrait  (OAuthClient: POST to token endpoint)
//!          │
//!          └──► TokenStore          (current pair + generation counter)
//! ```
//!
//! # Usage Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use msfchat_common::auth::{OAuthClient, TokenManager};
//! use msfchat_domain::{IdentityConfig, TokenPair};
//!
//! # async fn example(identity: IdentityConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = OAuthClient::new(identity, Duration::from_secs(30), false)?;
//! let manager = TokenManager::new(client, TokenPair::new("A1", "R1"));
//!
//! let snapshot = manager.access_snapshot().await;
//! // ... game API answered 401 ...
//! manager.refresh_after(snapshot.generation).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - **[`types`]**: token endpoint wire types and [`RefreshOutcome`]
//! - **[`client`]**: HTTP refresh client
//! - **[`token_store`]**: shared token pair with generation tracking
//! - **[`token_manager`]**: serialized refresh on top of the store

pub mod client;
pub mod token_manager;
pub mod token_store;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use client::{OAuthClient, OAuthClientError};
pub use token_manager::{TokenManager, TokenManagerError};
pub use token_store::{TokenSnapshot, TokenStore};
pub use traits::RefreshClientTrait;
pub use types::{OAuthError, RefreshOutcome, TokenResponse};
