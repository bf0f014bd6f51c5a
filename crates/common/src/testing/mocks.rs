//! Mock implementations of the auth traits

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use msfchat_domain::SecretString;

use crate::auth::{OAuthClientError, RefreshClientTrait, TokenResponse};

type ScriptedResponse = Result<TokenResponse, OAuthClientError>;

/// Mock refresh client.
///
/// Responses are served from a FIFO script. Once the script runs dry every
/// call succeeds with `refreshed_access_token` / `refreshed_refresh_token`.
/// Clones share state, so a test can keep one handle for assertions.
#[derive(Clone, Default)]
pub struct MockRefreshClient {
    responses: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    calls: Arc<AtomicUsize>,
    seen_refresh_tokens: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockRefreshClient {
    /// Create a new mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every call before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue the next response.
    pub fn push_response(&self, response: ScriptedResponse) {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(response);
    }

    /// Number of refresh calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Refresh tokens presented, in call order.
    #[must_use]
    pub fn seen_refresh_tokens(&self) -> Vec<String> {
        self.seen_refresh_tokens.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl RefreshClientTrait for MockRefreshClient {
    async fn refresh_access_token(
        &self,
        refresh_token: &SecretString,
    ) -> Result<TokenResponse, OAuthClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_refresh_tokens
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(refresh_token.expose().to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.responses.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
        scripted.unwrap_or_else(|| {
            Ok(TokenResponse::new("refreshed_access_token", Some("refreshed_refresh_token")))
        })
    }

    fn token_url(&self) -> &str {
        "mock://token"
    }
}
