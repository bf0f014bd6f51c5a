use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Events go to stderr so stdout stays reserved for command output. The
/// filter comes from `RUST_LOG`, defaulting to `info`.
///
/// # Errors
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).try_init()
    }
}

/// Log the outcome of a tool execution with structured fields.
///
/// # Parameters
/// * `function` - Assistant function name (e.g. `"get_roster"`).
/// * `elapsed` - Duration the dispatch took.
/// * `success` - Whether the output carried a payload rather than an error.
#[inline]
pub fn log_tool_execution(function: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(function, duration_ms, "tool_execution_success");
    } else {
        warn!(function, duration_ms, "tool_execution_failure");
    }
}

/// Log the outcome of one tool-call batch.
///
/// The calls in a batch run concurrently, so only the batch as a whole is
/// timed.
pub fn log_batch_execution(calls: usize, failures: usize, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    if failures == 0 {
        info!(calls, duration_ms, "tool_batch_success");
    } else {
        warn!(calls, failures, duration_ms, "tool_batch_failure");
    }
}

/// Whether a dispatch output is an error object or the unknown-function `{}`
pub fn is_error_output(output: &str) -> bool {
    match serde_json::from_str::<Value>(output) {
        Ok(Value::Object(map)) => {
            map.is_empty() || (map.len() == 1 && map.get("error").is_some_and(Value::is_string))
        }
        _ => false,
    }
}
