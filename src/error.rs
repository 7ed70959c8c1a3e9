//! Error types for tool dispatch and the server transports.

use thiserror::Error;

/// Failure to route or decode a `tools/call` request.
///
/// The shopping operations themselves never fail; these only arise while
/// decoding arguments or encoding results.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Missing tool name")]
    MissingName,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize result of {tool}: {source}")]
    Serialization {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup and transport failures surfaced from `main`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Framing error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
