//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use msfchat_common::{OAuthClient, TokenManager};
use msfchat_core::FunctionDispatcher;
use msfchat_domain::{Config, MsfChatError, Result, TokenPair};
use msfchat_infra::{config, GameApiClient, GameClientConfig, GameCommands};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub tokens: Arc<TokenManager<OAuthClient>>,
    pub game_client: Arc<GameApiClient>,
    pub dispatcher: Arc<FunctionDispatcher>,
}

impl AppContext {
    /// Load configuration (explicit file, then env, then probed files) and
    /// wire the services
    ///
    /// # Errors
    /// Returns error if configuration cannot be loaded or is invalid
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config = config::load_with_path(config_path)?;
        Self::from_config(config)
    }

    /// Wire the services from an already loaded configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be built
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_secs(config.fetch.timeout_secs);
        let oauth = OAuthClient::new(config.identity.clone(), timeout, config.fetch.disable_proxy)
            .map_err(|e| MsfChatError::Config(e.to_string()))?;
        let tokens = Arc::new(TokenManager::new(
            oauth,
            TokenPair::new(
                config.credentials.access_token.clone(),
                config.credentials.refresh_token.clone(),
            ),
        ));

        let client_config = GameClientConfig::from_config(&config)?;
        let game_client = Arc::new(GameApiClient::new(client_config, tokens.clone())?);

        let dispatcher = Arc::new(
            FunctionDispatcher::new(Arc::new(GameCommands::new(game_client.clone())))
                .with_retries(config.fetch.retries)
                .with_player_card_cache(Duration::from_secs(config.cache.player_card_ttl_secs)),
        );

        info!(
            retries = config.fetch.retries,
            refresh_failure = ?config.fetch.refresh_failure,
            player_card_ttl_secs = config.cache.player_card_ttl_secs,
            "Application context initialized"
        );

        Ok(Self { config, tokens, game_client, dispatcher })
    }
}
