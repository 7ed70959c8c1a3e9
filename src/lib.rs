//! Shopping MCP Library
//!
//! This library provides a mock shopping toolset (search, cart, offers,
//! delivery, payment) served over the Model Context Protocol.

// Domain modules
pub mod mcp;
pub mod shop;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
