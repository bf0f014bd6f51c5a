//! Authenticated game API fetcher
//!
//! Each fetch runs a small state machine:
//!
//! ```text
//! Attempting ─ 2xx ──────────────▶ Success
//!     │ 401/403
//!     ▼
//! RefreshAndRetry ─ retries left ─▶ Attempting
//!     │ budget spent
//!     ▼
//! RetriesExhausted ("Max Retries Reached")
//! ```
//!
//! Any other status, transport failure or unparseable body ends the fetch
//! immediately without a refresh.

use std::sync::Arc;
use std::time::Duration;

use msfchat_domain::constants::{API_KEY_HEADER, DEFAULT_REQUEST_TIMEOUT_SECS};
use msfchat_domain::{Config, Endpoint, FetchRequest, RefreshFailurePolicy, SecretString};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::auth::AccessTokenProvider;
use super::errors::FetchError;
use crate::http::HttpClient;

/// Configuration for the game API client
#[derive(Debug, Clone)]
pub struct GameClientConfig {
    /// Base URL, always ending in `/` (e.g. "https://api.marvelstrikeforce.com/player/v1/")
    pub base_url: Url,
    /// Static `x-api-key` value
    pub api_key: SecretString,
    /// Timeout for each GET
    pub timeout: Duration,
    /// What to do when a token refresh fails
    pub refresh_failure: RefreshFailurePolicy,
    /// Ignore system proxy settings
    pub disable_proxy: bool,
}

impl GameClientConfig {
    /// Create a configuration with default limits
    ///
    /// # Errors
    ///
    /// Returns error if `base_url` is not an absolute URL
    pub fn new(base_url: &str, api_key: impl Into<SecretString>) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            refresh_failure: RefreshFailurePolicy::default(),
            disable_proxy: false,
        })
    }

    /// Derive the client configuration from the application configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL is invalid
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: parse_base_url(&config.game_api.base_url)?,
            api_key: config.game_api.api_key.clone(),
            timeout: Duration::from_secs(config.fetch.timeout_secs),
            refresh_failure: config.fetch.refresh_failure,
            disable_proxy: config.fetch.disable_proxy,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_failure(mut self, policy: RefreshFailurePolicy) -> Self {
        self.refresh_failure = policy;
        self
    }

    pub fn with_disable_proxy(mut self, disabled: bool) -> Self {
        self.disable_proxy = disabled;
        self
    }
}

/// Parse a base URL and force a trailing `/` so endpoint suffixes append
fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let normalized =
        if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{trimmed}/") };

    let url = Url::parse(&normalized)
        .map_err(|e| FetchError::Config(format!("invalid game API base URL '{trimmed}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::Config(format!(
            "game API base URL '{trimmed}' cannot be a base"
        )));
    }
    Ok(url)
}

/// Game API client with token refresh on auth rejection
pub struct GameApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    config: GameClientConfig,
}

impl GameApiClient {
    /// Create a new game API client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration
    /// * `auth` - Access token provider
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created
    pub fn new(
        config: GameClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("msfchat/", env!("CARGO_PKG_VERSION")))
            .disable_proxy(config.disable_proxy)
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HttpClient: {}", e.0)))?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Game API client configured"
        );

        Ok(Self { http_client, auth, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> GameApiClientBuilder {
        GameApiClientBuilder::default()
    }

    pub fn config(&self) -> &GameClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, FetchError> {
        self.config.base_url.join(endpoint.path_suffix()).map_err(|e| {
            FetchError::Config(format!("cannot build URL for endpoint {endpoint}: {e}"))
        })
    }

    /// Fetch one endpoint, refreshing the token on 401/403
    ///
    /// At most `request.retries` GETs are sent. A budget of zero sends none.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`], [`FetchError::Network`] or
    ///   [`FetchError::InvalidJson`] on the first non-auth failure
    /// - [`FetchError::RefreshFailed`] when a refresh fails under the abort
    ///   policy
    /// - [`FetchError::MaxRetriesReached`] when every attempt was rejected
    #[instrument(
        skip(self, request),
        fields(endpoint = %request.endpoint(), retries = request.retries)
    )]
    pub async fn fetch(&self, request: &FetchRequest) -> Result<Value, FetchError> {
        let url = self.endpoint_url(request.endpoint())?;
        let query = request.query.query_pairs();

        let mut retries = request.retries;
        let mut attempt: u32 = 0;

        while retries > 0 {
            attempt += 1;
            let token = self.auth.access_token().await;

            match self.attempt(&url, &query, &token.access_token, attempt).await {
                Ok(payload) => {
                    debug!(attempt, "Game API request successful");
                    return Ok(payload);
                }
                Err(e) if e.is_auth_rejection() => {
                    warn!(attempt, status = e.status_code(), "Access token rejected, refreshing");

                    if let Err(refresh_error) = self.auth.refresh(token.generation).await {
                        match self.config.refresh_failure {
                            RefreshFailurePolicy::Abort => {
                                return Err(FetchError::RefreshFailed(refresh_error.to_string()));
                            }
                            RefreshFailurePolicy::Continue => {
                                warn!(
                                    attempt,
                                    error = %refresh_error,
                                    "Token refresh failed, retrying with current token"
                                );
                            }
                        }
                    }

                    retries -= 1;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Game API request failed");
                    return Err(e);
                }
            }
        }

        warn!(attempts = attempt, "Retry budget exhausted");
        Err(FetchError::MaxRetriesReached)
    }

    async fn attempt(
        &self,
        url: &Url,
        query: &[(&'static str, String)],
        access_token: &SecretString,
        attempt: u32,
    ) -> Result<Value, FetchError> {
        let request = self
            .http_client
            .request(Method::GET, url.clone())
            .query(query)
            .header(API_KEY_HEADER, self.config.api_key.expose())
            .bearer_auth(access_token.expose());

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|e| FetchError::Network(e.detail().to_string()))?;

        let status = response.status();
        debug!(attempt, status = status.as_u16(), "Game API responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized { status: status.as_u16() });
        }
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| {
            let infra: crate::errors::InfraError = e.into();
            FetchError::Network(infra.detail().to_string())
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }
}

/// Builder for [`GameApiClient`]
#[derive(Default)]
pub struct GameApiClientBuilder {
    config: Option<GameClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl GameApiClientBuilder {
    pub fn config(mut self, config: GameClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns error if configuration or auth provider is missing
    pub fn build(self) -> Result<GameApiClient, FetchError> {
        let config =
            self.config.ok_or_else(|| FetchError::Config("client config is required".into()))?;
        let auth = self
            .auth
            .ok_or_else(|| FetchError::Config("access token provider is required".into()))?;
        GameApiClient::new(config, auth)
    }
}
