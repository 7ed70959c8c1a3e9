//! Application State
//!
//! The only shared state is the read-only tool registry; carts are never
//! stored server-side.

use crate::mcp::ToolRegistry;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
pub struct AppState {
    /// Tools exposed by this server, built once at startup.
    pub registry: ToolRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an AppState holding the shopping tools
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::shopping(),
        }
    }
}
