//! Function-call dispatcher

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use msfchat_domain::constants::DEFAULT_FETCH_RETRIES;
use msfchat_domain::{Endpoint, FetchQuery, FetchRequest, FetchResult, ToolCall, ToolOutput};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::args::parse_query;
use super::cache::PlayerCardCache;
use super::catalog::tool_definitions;
use super::error::DispatchError;
use crate::ports::GameDataPort;

/// Output for function names outside the catalog
const UNKNOWN_FUNCTION_OUTPUT: &str = "{}";

/// Maps assistant function calls onto game data fetches
pub struct FunctionDispatcher {
    port: Arc<dyn GameDataPort>,
    player_card_cache: Option<PlayerCardCache>,
    retries: u32,
}

impl FunctionDispatcher {
    /// Create a dispatcher with the default retry budget and no cache
    pub fn new(port: Arc<dyn GameDataPort>) -> Self {
        Self { port, player_card_cache: None, retries: DEFAULT_FETCH_RETRIES }
    }

    /// Retry budget handed to every fetch
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Cache successful player card payloads for `ttl`; zero disables
    pub fn with_player_card_cache(mut self, ttl: Duration) -> Self {
        self.player_card_cache = PlayerCardCache::new(ttl);
        self
    }

    /// Tool definitions to register with the assistant
    pub fn tool_definitions(&self) -> Vec<Value> {
        tool_definitions()
    }

    /// Dispatch one function call and serialize the outcome
    ///
    /// Unknown names yield `{}` without touching the network. Bad arguments
    /// yield `{"error": "Invalid arguments for <name>: ..."}`.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: &str) -> String {
        match self.dispatch_result(name, arguments).await {
            Ok(result) => result.to_json_string(),
            Err(DispatchError::UnknownFunction(_)) => {
                warn!("Unknown function requested, returning empty object");
                UNKNOWN_FUNCTION_OUTPUT.to_string()
            }
            Err(e @ DispatchError::InvalidArguments { .. }) => {
                warn!(error = %e, "Rejected function arguments");
                FetchResult::error(e.to_string()).to_json_string()
            }
        }
    }

    /// Typed form of [`dispatch`](Self::dispatch)
    ///
    /// # Errors
    /// Returns error if the name is unknown or the arguments do not parse
    pub async fn dispatch_result(
        &self,
        name: &str,
        arguments: &str,
    ) -> Result<FetchResult, DispatchError> {
        let endpoint = Endpoint::from_function_name(name)
            .ok_or_else(|| DispatchError::UnknownFunction(name.to_string()))?;
        let query = parse_query(endpoint, arguments)?;
        Ok(self.fetch(query).await)
    }

    /// Handle a batch of tool calls concurrently, preserving input order
    pub async fn handle_tool_calls(&self, calls: &[ToolCall]) -> Vec<ToolOutput> {
        let started = Instant::now();
        let outputs = join_all(calls.iter().map(|call| async move {
            ToolOutput {
                tool_call_id: call.id.clone(),
                output: self.dispatch(&call.function.name, &call.function.arguments).await,
            }
        }))
        .await;

        info!(
            calls = calls.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tool call batch handled"
        );
        outputs
    }

    async fn fetch(&self, query: FetchQuery) -> FetchResult {
        let cache = match (&query, &self.player_card_cache) {
            (FetchQuery::PlayerCard, Some(cache)) => Some(cache),
            _ => None,
        };

        if let Some(payload) = cache.and_then(PlayerCardCache::get) {
            debug!("Player card served from cache");
            return FetchResult::Success(payload);
        }

        let result = self.port.fetch(FetchRequest::new(query).with_retries(self.retries)).await;

        if let (Some(cache), FetchResult::Success(payload)) = (cache, &result) {
            cache.insert(payload.clone());
        }
        result
    }
}
