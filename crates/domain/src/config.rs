//! Configuration structures
//!
//! Loaded by the infra config loader from environment variables or a
//! `msfchat.toml` / `msfchat.json` file.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_FETCH_RETRIES, DEFAULT_PLAYER_CARD_CACHE_TTL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_URL,
};
use crate::errors::{MsfChatError, Result};
use crate::types::SecretString;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game_api: GameApiConfig,
    pub identity: IdentityConfig,
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Reject configurations with empty credentials or non-positive limits
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("game_api.api_key", &self.game_api.api_key),
            ("identity.client_secret", &self.identity.client_secret),
            ("credentials.access_token", &self.credentials.access_token),
            ("credentials.refresh_token", &self.credentials.refresh_token),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(MsfChatError::Config(format!("{name} must not be empty")));
            }
        }
        if self.identity.client_id.trim().is_empty() {
            return Err(MsfChatError::Config("identity.client_id must not be empty".into()));
        }
        if self.game_api.base_url.trim().is_empty() {
            return Err(MsfChatError::Config("game_api.base_url must not be empty".into()));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(MsfChatError::Config("fetch.timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

/// Game API endpoint and static API key
#[derive(Debug, Clone, Deserialize)]
pub struct GameApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    pub api_key: SecretString,
}

/// Identity provider used for token refresh
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

/// Initial token pair
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
}

/// What the fetcher does when a token refresh fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshFailurePolicy {
    /// Log the failure and spend the retry anyway
    #[default]
    Continue,
    /// Stop and report the refresh failure to the caller
    Abort,
}

/// Fetcher limits
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_retries")]
    pub retries: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub refresh_failure: RefreshFailurePolicy,
    /// Bypass system HTTP proxies for both upstreams
    #[serde(default)]
    pub disable_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            retries: DEFAULT_FETCH_RETRIES,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            refresh_failure: RefreshFailurePolicy::default(),
            disable_proxy: false,
        }
    }
}

/// Player card cache; a TTL of zero disables caching
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_player_card_ttl")]
    pub player_card_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { player_card_ttl_secs: DEFAULT_PLAYER_CARD_CACHE_TTL_SECS }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_fetch_retries() -> u32 {
    DEFAULT_FETCH_RETRIES
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_player_card_ttl() -> u64 {
    DEFAULT_PLAYER_CARD_CACHE_TTL_SECS
}
