use msfchat_core::tool_definitions;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write the assistant tool catalog as a pretty-printed JSON array
///
/// # Errors
/// Returns error if the writer fails
pub async fn run_tools<W>(writer: &mut W) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let catalog = serde_json::to_string_pretty(&tool_definitions())?;
    writer.write_all(catalog.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
