//! Data transfer objects for the WebSocket protocol, the admin HTTP API and
//! the execution service wire format.

pub mod http;
pub mod websocket;
