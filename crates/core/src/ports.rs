//! Port interfaces for game data access
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use msfchat_domain::{FetchRequest, FetchResult};

/// Trait for fetching player data from the game API
///
/// Implementations own authentication and retry. Failures are reported as
/// [`FetchResult::Error`] rather than `Err`, so the caller can hand them to
/// the assistant verbatim.
#[async_trait]
pub trait GameDataPort: Send + Sync {
    /// Run one authenticated fetch
    async fn fetch(&self, request: FetchRequest) -> FetchResult;
}
