//! MCP server over stdio: newline-delimited JSON-RPC in, one response line out.
//!
//! [`run_loop`] is generic over any async line source and sink so it can be
//! driven from in-memory buffers; [`serve_stdio`] wires it to the process streams.

use anyhow::{Context, Result};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::FieldGuideConfig;
use crate::corpus::Corpus;
use crate::protocol::{Dispatcher, Response, RpcError};
use crate::tools::FieldGuideTools;

/// Load the record store named by the config, or the bundled one.
pub fn load_corpus(config: &FieldGuideConfig) -> Result<Corpus> {
    let corpus = match config.resolved_corpus_path() {
        Some(path) => Corpus::load(&path, config.corpus.source.clone())
            .with_context(|| format!("failed to load patterns from {}", path.display()))?,
        None => Corpus::bundled(config.corpus.source.clone())
            .context("bundled dataset is invalid")?,
    };
    tracing::info!(
        patterns = corpus.len(),
        categories = corpus.index().len(),
        "pattern store ready"
    );
    Ok(corpus)
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: FieldGuideConfig) -> Result<()> {
    tracing::info!("starting agent field guide MCP server on stdio");

    let corpus = Arc::new(load_corpus(&config)?);
    let dispatcher = Dispatcher::new(FieldGuideTools::new(corpus));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_loop(stdin, stdout, &dispatcher).await?;

    tracing::info!("input closed, MCP server shut down");
    Ok(())
}

/// Process requests one line at a time until end of input.
///
/// Blank lines are skipped. Each line is fully handled, and its response (if
/// any) written and flushed, before the next line is read. A line that is not
/// valid UTF-8 gets a parse error like any other malformed message.
pub async fn run_loop<R, W>(mut reader: R, mut writer: W, dispatcher: &Dispatcher) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read request line")?;
        if read == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                dispatcher.handle_line(line)
            }
            Err(e) => {
                let err = RpcError::Parse(e.to_string());
                tracing::warn!(error = %err, "request line is not valid UTF-8");
                Some(Response::error(Value::Null, &err))
            }
        };
        if let Some(response) = response {
            write_response(&mut writer, &response).await?;
        }
    }
    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &Response) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(response).context("failed to encode response")?;
    line.push('\n');
    writer
        .write_all(line.as_bytes())
        .await
        .context("failed to write response")?;
    writer.flush().await.context("failed to flush response")?;
    Ok(())
}
