//! # msfchat Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for game data access
//! - The function-call dispatcher the assistant drives
//! - The assistant tool catalog
//!
//! ## Architecture Principles
//! - Only depends on `msfchat-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod dispatch;
pub mod ports;

// Re-export specific items to avoid ambiguity
pub use dispatch::{tool_definitions, DispatchError, FunctionDispatcher, PlayerCardCache};
pub use ports::GameDataPort;
