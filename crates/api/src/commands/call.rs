use std::time::Instant;

use msfchat_core::FunctionDispatcher;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::utils::{is_error_output, log_tool_execution};

/// Dispatch one function call and write its output line
///
/// Returns whether the output carried a payload rather than an error.
///
/// # Errors
/// Returns error if the writer fails
pub async fn run_call<W>(
    dispatcher: &FunctionDispatcher,
    name: &str,
    arguments: &str,
    writer: &mut W,
) -> std::io::Result<bool>
where
    W: AsyncWrite + Unpin,
{
    let started = Instant::now();
    let output = dispatcher.dispatch(name, arguments).await;
    let success = !is_error_output(&output);
    log_tool_execution(name, started.elapsed(), success);

    writer.write_all(output.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(success)
}
