//! Marvel Strike Force game API client
//!
//! Authenticated, read-only access to the player endpoints (roster, squads,
//! inventory, player card). Every request carries the static `x-api-key` and
//! the current bearer token; an auth rejection triggers a token refresh and
//! a retry until the caller's retry budget is spent.
//!
//! # Architecture
//!
//! ```text
//! GameCommands (GameDataPort)
//!     └─ GameApiClient ── fetch state machine
//!           ├─ HttpClient ── single GET per attempt
//!           └─ AccessTokenProvider ── TokenManager (msfchat-common)
//! ```

pub mod auth;
pub mod client;
pub mod commands;
pub mod errors;

pub use auth::AccessTokenProvider;
pub use client::{GameApiClient, GameApiClientBuilder, GameClientConfig};
pub use commands::GameCommands;
pub use errors::{FetchError, FetchErrorCategory};
