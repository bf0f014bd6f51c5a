//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Upstream services
pub const DEFAULT_API_BASE_URL: &str = "https://api.marvelstrikeforce.com/player/v1/";
pub const DEFAULT_TOKEN_URL: &str = "https://hydra-public.prod.m3.scopelypv.com/oauth2/token";
pub const API_KEY_HEADER: &str = "x-api-key";

// Fetch behavior
pub const DEFAULT_FETCH_RETRIES: u32 = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_RETRIES_REACHED: &str = "Max Retries Reached";

// Player card cache
pub const DEFAULT_PLAYER_CARD_CACHE_TTL_SECS: u64 = 300;

// Query defaults (roster and inventory pagination, inventory formatting)
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_ITEM_FORMAT: &str = "id";
pub const DEFAULT_STATS_FORMAT: &str = "object";
pub const DEFAULT_PIECE_INFO: &str = "full";
pub const DEFAULT_LANG: &str = "en";
