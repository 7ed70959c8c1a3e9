//! Command-line and environment configuration

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// How the server talks to its client
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "shopping-mcp",
    about = "Mock shopping tools served over the Model Context Protocol",
    version
)]
pub struct Config {
    /// Transport to serve on
    #[arg(long, value_enum, env = "SHOPPING_TRANSPORT", default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Address the HTTP transport binds to
    #[arg(long, env = "SHOPPING_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "SHOPPING_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Installs the global tracing subscriber.
    ///
    /// Logs go to stderr since stdout carries protocol messages in stdio mode.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_with_bind() {
        let config = Config::try_parse_from([
            "shopping-mcp",
            "--transport",
            "http",
            "--bind",
            "127.0.0.1:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_transport() {
        assert!(Config::try_parse_from(["shopping-mcp", "--transport", "carrier-pigeon"]).is_err());
    }
}
