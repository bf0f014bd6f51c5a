//! Testing utilities and helpers
//!
//! - **[`mocks`]**: mock refresh client with scripted responses
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use msfchat_common::auth::TokenResponse;
//! use msfchat_common::testing::MockRefreshClient;
//!
//! let client = MockRefreshClient::new();
//! client.push_response(Ok(TokenResponse::new("A2", Some("R2"))));
//! # }
//! ```

pub mod mocks;

pub use mocks::MockRefreshClient;
