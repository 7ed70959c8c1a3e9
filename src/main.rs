use clap::Parser;
use shopping_mcp_rust::config::{Config, Transport};
use shopping_mcp_rust::error::Result;
use shopping_mcp_rust::mcp::stdio::serve_stdio;
use shopping_mcp_rust::router::create_app_router;
use shopping_mcp_rust::state::AppState;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.init_logging();

    // Initialize application state
    let state = Arc::new(AppState::new());
    info!(tools = ?state.registry.names(), "Registered tools");

    match config.transport {
        Transport::Stdio => {
            info!("Serving MCP over stdio");
            serve_stdio(&state.registry).await
        }
        Transport::Http => {
            // Build application router with all routes and middleware
            let app = create_app_router(state);

            let listener = tokio::net::TcpListener::bind(config.bind).await?;
            info!(addr = %config.bind, "Serving MCP over HTTP");
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
