//! Function-call dispatch
//!
//! Turns an assistant function call (`name` + JSON argument string) into a
//! game data fetch and serializes the result back to a string.

pub mod args;
pub mod cache;
pub mod catalog;
pub mod dispatcher;
pub mod error;

pub use args::parse_query;
pub use cache::PlayerCardCache;
pub use catalog::tool_definitions;
pub use dispatcher::FunctionDispatcher;
pub use error::DispatchError;
