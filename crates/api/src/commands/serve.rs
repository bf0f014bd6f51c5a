use std::time::Instant;

use msfchat_core::FunctionDispatcher;
use msfchat_domain::{FetchResult, ToolCall};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::utils::{is_error_output, log_batch_execution};

/// Serve newline-delimited tool-call batches until the reader is exhausted
///
/// Each non-blank input line is either one tool call object or an array of
/// them. Each produces exactly one output line: the JSON array of
/// `{tool_call_id, output}` in input order, or an error object when the
/// line is not a valid batch.
///
/// Returns the number of lines answered.
///
/// # Errors
/// Returns error if reading or writing fails
pub async fn run_serve<R, W>(
    dispatcher: &FunctionDispatcher,
    reader: R,
    writer: &mut W,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut answered = 0usize;

    info!("Serving tool-call batches from stdin");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match parse_batch(line) {
            Ok(calls) => {
                debug!(calls = calls.len(), "Tool call batch received");
                let started = Instant::now();
                let outputs = dispatcher.handle_tool_calls(&calls).await;
                let failures =
                    outputs.iter().filter(|output| is_error_output(&output.output)).count();
                log_batch_execution(outputs.len(), failures, started.elapsed());
                serde_json::to_string(&outputs)?
            }
            Err(e) => {
                warn!(error = %e, "Rejected tool call batch");
                FetchResult::error(format!("Invalid tool call batch: {e}")).to_json_string()
            }
        };

        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        answered += 1;
    }

    info!(batches = answered, "Input closed, stopping");
    Ok(answered)
}

fn parse_batch(line: &str) -> Result<Vec<ToolCall>, serde_json::Error> {
    match serde_json::from_str::<Value>(line)? {
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        single => serde_json::from_value(single).map(|call| vec![call]),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use msfchat_core::GameDataPort;
    use msfchat_domain::FetchRequest;
    use serde_json::json;

    use super::*;

    /// In-memory sink for formatted log lines
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct EchoPort;

    #[async_trait]
    impl GameDataPort for EchoPort {
        async fn fetch(&self, request: FetchRequest) -> FetchResult {
            FetchResult::Success(json!({ "endpoint": request.endpoint().as_str() }))
        }
    }

    #[tokio::test]
    async fn batch_is_logged_once_with_failure_count() {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let dispatcher = FunctionDispatcher::new(Arc::new(EchoPort));
        let input = concat!(
            r#"[{"id":"a","function":{"name":"get_squads","arguments":""}},"#,
            r#"{"id":"b","function":{"name":"get_alliance","arguments":""}}]"#,
            "\n"
        );
        let mut out = Vec::new();

        let answered = run_serve(&dispatcher, input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(answered, 1);
        let logs = logs.contents();
        assert_eq!(logs.matches("tool_batch_failure").count(), 1);
        assert!(logs.contains("calls=2"));
        assert!(logs.contains("failures=1"));
        assert!(!logs.contains("tool_execution_"));
    }

    #[test]
    fn accepts_single_call_or_array() {
        let single = r#"{"id":"a","function":{"name":"get_squads","arguments":""}}"#;
        assert_eq!(parse_batch(single).unwrap().len(), 1);

        let batch = format!("[{single},{single}]");
        assert_eq!(parse_batch(&batch).unwrap().len(), 2);
    }

    #[test]
    fn rejects_non_call_documents() {
        assert!(parse_batch("42").is_err());
        assert!(parse_batch(r#"[{"id":"a"}]"#).is_err());
        assert!(parse_batch("{not json").is_err());
    }
}
