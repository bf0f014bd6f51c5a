//! Shared helpers for the command layer

pub mod logging;

pub use logging::{init_tracing, is_error_output, log_batch_execution, log_tool_execution};
