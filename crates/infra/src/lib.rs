//! # msfchat Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP transport shared by the game API client
//! - The authenticated game API fetcher (retry-on-401/403 state machine)
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements [`msfchat_core::GameDataPort`]
//! - Depends on `msfchat-common` for token refresh and `msfchat-domain` for
//!   configuration and result types
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod game;
pub mod http;

// Re-export commonly used items
pub use errors::InfraError;
pub use game::{
    AccessTokenProvider, FetchError, FetchErrorCategory, GameApiClient, GameApiClientBuilder,
    GameClientConfig, GameCommands,
};
pub use http::{HttpClient, HttpClientBuilder};
