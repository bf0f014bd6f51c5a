//! Player card caching with moka
//!
//! The player card changes rarely and the assistant tends to ask for it at
//! the start of every conversation. Successful payloads are kept for a fixed
//! TTL; error results are never stored.

use std::time::Duration;

use moka::sync::Cache;
use serde_json::Value;
use tracing::{debug, info};

/// Single-entry TTL cache for the player card payload
#[derive(Clone)]
pub struct PlayerCardCache {
    cache: Cache<(), Value>,
    ttl: Duration,
}

impl PlayerCardCache {
    /// Create a cache, or `None` when `ttl` is zero
    pub fn new(ttl: Duration) -> Option<Self> {
        if ttl.is_zero() {
            debug!("Player card cache disabled");
            return None;
        }
        info!(ttl_seconds = ttl.as_secs(), "Player card cache configured");
        Some(Self { cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(), ttl })
    }

    pub fn get(&self) -> Option<Value> {
        self.cache.get(&())
    }

    pub fn insert(&self, payload: Value) {
        self.cache.insert((), payload);
    }
}

impl std::fmt::Debug for PlayerCardCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerCardCache").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}
