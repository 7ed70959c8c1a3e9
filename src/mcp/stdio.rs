//! Stdio transport
//!
//! Reads newline-delimited JSON-RPC messages and writes one response line per
//! request. Notifications produce no output. A malformed line (invalid UTF-8,
//! over-long or not JSON) is answered with a parse error and the loop keeps
//! going; only I/O failures or EOF end it.

use super::{handlers::dispatch, helpers::rpc_error, models::*, registry::ToolRegistry};
use crate::error::Result;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{info, warn};

/// Longest accepted request line, in bytes (1 MiB)
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

/// One decoded input line
#[derive(Debug, PartialEq, Eq)]
pub enum Frame {
    Line(String),
    /// The line was not valid UTF-8
    NotUtf8,
    /// The line exceeded the length limit; the rest of it is discarded
    TooLong,
}

/// `LinesCodec` that reports malformed lines as frames instead of errors.
///
/// `FramedRead` stops yielding after a decoder error, so recoverable line
/// problems must not surface as `Err`.
#[derive(Debug)]
pub struct RequestLineCodec {
    lines: LinesCodec,
}

impl RequestLineCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn classify(
        result: std::result::Result<Option<String>, LinesCodecError>,
    ) -> io::Result<Option<Frame>> {
        match result {
            Ok(line) => Ok(line.map(Frame::Line)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Frame::TooLong)),
            Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Some(Frame::NotUtf8))
            }
            Err(LinesCodecError::Io(e)) => Err(e),
        }
    }
}

impl Decoder for RequestLineCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::classify(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        Self::classify(self.lines.decode_eof(buf))
    }
}

/// Serves the registry over the process's stdin and stdout.
pub async fn serve_stdio(registry: &ToolRegistry) -> Result<()> {
    serve(registry, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serves the registry over any line-oriented reader/writer pair.
pub async fn serve<R, W>(registry: &ToolRegistry, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    serve_with_limit(registry, reader, writer, MAX_LINE_LENGTH).await
}

/// Like [`serve`], with an explicit line length limit.
pub async fn serve_with_limit<R, W>(
    registry: &ToolRegistry,
    reader: R,
    writer: W,
    max_line_length: usize,
) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut frames = FramedRead::new(reader, RequestLineCodec::new(max_line_length));
    let mut sink = FramedWrite::new(writer, LinesCodec::new());

    while let Some(frame) = frames.next().await {
        let response = match frame? {
            Frame::Line(line) if line.trim().is_empty() => continue,
            Frame::Line(line) => match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(req) => dispatch(registry, req),
                Err(e) => {
                    warn!(error = %e, "JSON parse error");
                    Some(rpc_error(Value::Null, PARSE_ERROR, "Parse error"))
                }
            },
            Frame::NotUtf8 => {
                warn!("Input line is not valid UTF-8");
                Some(rpc_error(Value::Null, PARSE_ERROR, "Parse error"))
            }
            Frame::TooLong => {
                warn!(max_line_length, "Input line too long");
                Some(rpc_error(Value::Null, PARSE_ERROR, "Parse error"))
            }
        };

        if let Some(response) = response {
            sink.send(serde_json::to_string(&response)?).await?;
        }
    }

    info!("Input closed, stopping stdio transport");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn run_with_limit(input: &[u8], max_line_length: usize) -> Vec<Value> {
        let registry = ToolRegistry::shopping();
        let mut output = Vec::new();
        serve_with_limit(&registry, input, &mut output, max_line_length)
            .await
            .unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    async fn run(input: &str) -> Vec<Value> {
        run_with_limit(input.as_bytes(), MAX_LINE_LENGTH).await
    }

    #[tokio::test]
    async fn test_session_over_lines() {
        let input = [
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
            json!({
                "jsonrpc": "2.0",
                "id": 3,
                "method": "tools/call",
                "params": { "name": "confirm_card_on_file", "arguments": {} }
            }),
        ]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

        let responses = run(&input).await;

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "shopping");
        assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 7);
        assert_eq!(
            responses[2]["result"]["structuredContent"]["confirmed"],
            true
        );
    }

    #[tokio::test]
    async fn test_garbage_line_gets_parse_error() {
        let responses = run("not json\n\n{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}\n").await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[1]["id"], 9);
        assert_eq!(responses[1]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_serving() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":4,\"method\":\"ping\"}\n");

        let responses = run_with_limit(&input, MAX_LINE_LENGTH).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 4);
        assert_eq!(responses[1]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_overlong_line_is_skipped() {
        let mut input = vec![b'x'; 200];
        input.push(b'\n');
        input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"ping\"}\n");

        let responses = run_with_limit(&input, 64).await;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 5);
    }

    #[tokio::test]
    async fn test_null_id_is_answered() {
        let responses = run("{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"ping\"}\n").await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["result"], json!({}));
    }
}
