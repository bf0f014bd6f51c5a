//! CLI commands - stdin/stdout bridge to the dispatcher
//!
//! Handlers are generic over the reader and writer so they run the same
//! against the process streams and in-memory buffers.

mod call;
mod serve;
mod tools;

pub use call::run_call;
pub use serve::run_serve;
pub use tools::run_tools;
