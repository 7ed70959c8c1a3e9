//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "shopping";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Header carrying the session id handed out on `initialize` over HTTP
pub const SESSION_HEADER: &str = "mcp-session-id";

/// JSON-RPC error codes used by the server
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// Tool Names
// =============================================================================

pub const SEARCH_ITEM: &str = "search_item";
pub const ADD_TO_CART: &str = "add_to_cart";
pub const REMOVE_FROM_CART: &str = "remove_from_cart";
pub const STORE_OFFERS: &str = "store_offers";
pub const GET_DELIVERY_OPTION: &str = "get_delivery_option";
pub const CONFIRM_CARD_ON_FILE: &str = "confirm_card_on_file";
pub const PROCESS_PAYMENT: &str = "process_payment";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier; absent for notifications. An explicit `null`
    /// id is kept as `Some(Value::Null)` and still gets a response.
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
}

/// Marks a present `id` as `Some`, even when its value is `null`.
fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcRequest {
    /// Returns `true` when the sender expects no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}
