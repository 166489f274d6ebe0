//! Collaborative code editor server.
//!
//! Serves the client bundle, coordinates WebSocket editing sessions and
//! proxies code execution requests to the external execution service.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! ```

use code_collab_rs::{ServerConfig, common::logger::setup_logger};

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::load();

    // Run the server
    if let Err(e) = code_collab_rs::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
