//! Shared application state.

use std::sync::Arc;

use crate::domain::{ConnectionRegistry, ExecutionService, RoomStore};

/// Shared application state
///
/// The Room Store and Connection Registry are the only shared mutable state
/// in the process; both are reached exclusively through this struct.
pub struct AppState {
    /// Store of live rooms
    pub rooms: Arc<dyn RoomStore>,
    /// Registry of live WebSocket connections
    pub connections: Arc<dyn ConnectionRegistry>,
    /// Outbound execution service client
    pub executor: Arc<dyn ExecutionService>,
}
