//! Stdio transport layer for the Model Context Protocol
//!
//! Reads one newline-delimited JSON-RPC value per stdin line and writes at
//! most one response line to stdout, flushed before the next read so a client
//! consuming the stream incrementally sees responses in request order.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::mcp::server::handle_json_rpc_value;
use crate::AppState;

/// Runs the read loop until the input stream ends. Malformed lines are
/// dropped; only I/O failures on the streams themselves terminate the loop.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = process_line(&state, &line).await {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

/// Handles a single input line, returning the serialized response line when
/// the request warrants one.
pub async fn process_line(state: &AppState, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    info!(line = %line, "received");

    let payload: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "dropping malformed input line");
            return None;
        }
    };

    let response = handle_json_rpc_value(state, payload).await?;
    let rendered = response.to_string();
    info!(response = %rendered, "sending");
    Some(rendered)
}
