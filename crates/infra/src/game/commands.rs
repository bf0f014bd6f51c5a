//! Game API commands
//!
//! The [`GameDataPort`] implementation the dispatcher calls into. Errors
//! never escape as `Err`: they are folded into [`FetchResult::Error`] here.

use std::sync::Arc;

use async_trait::async_trait;
use msfchat_core::GameDataPort;
use msfchat_domain::{FetchRequest, FetchResult};
use tracing::{error, instrument, warn};

use super::client::GameApiClient;
use super::errors::FetchErrorCategory;

/// Game API commands for the player endpoints
pub struct GameCommands {
    client: Arc<GameApiClient>,
}

impl GameCommands {
    /// Create a new commands instance
    ///
    /// # Arguments
    ///
    /// * `client` - Game API client
    pub fn new(client: Arc<GameApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    async fn run(&self, request: FetchRequest) -> FetchResult {
        match self.client.fetch(&request).await {
            Ok(payload) => FetchResult::Success(payload),
            Err(e) => {
                match e.category() {
                    FetchErrorCategory::Config | FetchErrorCategory::Refresh => {
                        error!(error = %e, "Game API fetch failed");
                    }
                    _ => warn!(error = %e, "Game API fetch failed"),
                }
                e.into()
            }
        }
    }
}

#[async_trait]
impl GameDataPort for GameCommands {
    async fn fetch(&self, request: FetchRequest) -> FetchResult {
        self.run(request).await
    }
}
