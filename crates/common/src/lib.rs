//! Shared auth infrastructure for msfchat crates.
//!
//! # Modules
//!
//! - [`auth`]: Token Store, refresh client and the single-flight token
//!   manager used by every game API fetcher
//! - [`testing`]: mock refresh client for downstream tests (`test-utils`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use auth::{
    OAuthClient, OAuthClientError, RefreshClientTrait, RefreshOutcome, TokenManager,
    TokenManagerError, TokenResponse, TokenSnapshot, TokenStore,
};
