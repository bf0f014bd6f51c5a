//! # msfchat App
//!
//! Application layer - CLI commands and main entry point.
//!
//! This crate contains:
//! - CLI definition and command handlers (tool catalog, single call, serve)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `common`, `core`, and `infra`
//! - Wires up the token manager, game client and dispatcher
//! - Speaks newline-delimited JSON on stdin/stdout; logs go to stderr

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use commands::{run_call, run_serve, run_tools};
pub use context::AppContext;
