//! Real-time collaborative code editor, server side.
//!
//! This library implements the session coordinator: rooms with a shared code
//! buffer and language selection, WebSocket membership lifecycle, and
//! out-of-process code execution proxied to an external execution service.

pub mod common;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
