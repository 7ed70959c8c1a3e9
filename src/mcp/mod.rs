//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants, tool names)
//! - RPC helpers (success/error responses, tool result wrapping)
//! - The tool registry
//! - MCP handlers (initialize, tools/list, tools/call, etc.)
//! - The stdio transport

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod stdio;

// Re-export commonly used types and functions
pub use handlers::routes;
pub use registry::{ToolDefinition, ToolRegistry};
