//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC dispatch shared by the stdio and HTTP
//! transports, plus the HTTP routes. `dispatch` and `handle_tool_call` are
//! public so they can be exercised directly in tests.

use super::{helpers::*, models::*, registry::ToolRegistry};
use crate::error::ToolError;
use crate::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp))
        .route("/mcp", post(handle_mcp)) // Standard endpoint
        .route("/mcp/", post(handle_mcp)) // Trailing slash safety
}

/// Endpoint: POST /mcp
/// Handles one JSON-RPC message per request.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(error = %e.body_text(), "JSON parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let starts_session = req.method == "initialize";

    match dispatch(&state.registry, req) {
        // Notifications get no body
        None => StatusCode::ACCEPTED.into_response(),
        Some(body) => {
            let mut response = Json(body).into_response();
            if starts_session {
                let session_id = Uuid::new_v4().simple().to_string();
                if let Ok(value) = HeaderValue::from_str(&session_id) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(SESSION_HEADER), value);
                }
            }
            response
        }
    }
}

/// Routes a JSON-RPC message to its method handler.
///
/// Returns `None` for notifications (messages without an `id`), which must
/// not be answered.
pub fn dispatch(registry: &ToolRegistry, req: JsonRpcRequest) -> Option<Value> {
    if req.is_notification() {
        debug!(method = %req.method, "MCP notification");
        return None;
    }

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(method = method_name, id = %id, "MCP call");

    let response = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list(registry)),
        "tools/call" => match handle_tool_call(registry, &params) {
            Ok(result) => rpc_success(id, result),
            Err(e) => {
                warn!(error = %e, "Tool call rejected");
                rpc_error(id, INVALID_PARAMS, e.to_string())
            }
        },
        m if m.starts_with("notifications/") => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "Unknown method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Some(response)
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list(registry: &ToolRegistry) -> Value {
    json!({ "tools": registry.definitions() })
}

/// Handles `tools/call` request.
pub fn handle_tool_call(registry: &ToolRegistry, params: &Value) -> Result<Value, ToolError> {
    let tool_name = params
        .get("name")
        .and_then(|n| n.as_str())
        .ok_or(ToolError::MissingName)?;
    let args = params.get("arguments").cloned().unwrap_or(Value::Null);

    let output = registry.call(tool_name, args)?;
    Ok(tool_result(output))
}
