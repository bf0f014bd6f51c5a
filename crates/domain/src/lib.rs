//! # msfchat Domain
//!
//! Domain types and models shared by every msfchat crate.
//!
//! This crate contains:
//! - Token, endpoint, query and fetch-result types
//! - Assistant tool-call types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other msfchat crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
