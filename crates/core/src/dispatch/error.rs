//! Dispatcher errors

use thiserror::Error;

/// Errors raised before a fetch is attempted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Invalid arguments for {function}: {detail}")]
    InvalidArguments { function: String, detail: String },
}

impl DispatchError {
    pub fn invalid_arguments(function: &str, detail: impl Into<String>) -> Self {
        Self::InvalidArguments { function: function.to_string(), detail: detail.into() }
    }
}
