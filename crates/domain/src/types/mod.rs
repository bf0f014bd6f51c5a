//! Domain types and models

pub mod endpoint;
pub mod fetch;
pub mod query;
pub mod secret;
pub mod token;
pub mod tool;

pub use endpoint::Endpoint;
pub use fetch::{ErrorResult, FetchResult};
pub use query::{FetchQuery, FetchRequest, InventoryQuery, RosterQuery, SquadsQuery};
pub use secret::SecretString;
pub use token::TokenPair;
pub use tool::{FunctionCall, ToolCall, ToolOutput};
