//! WebSocket message DTOs for the collaborative editor protocol.
//!
//! Events are internally tagged on `type` with camelCase names, matching the
//! existing client bundle.

use serde::{Deserialize, Serialize};

/// Events sent by clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Join a room under a display name. Implicitly leaves any room the
    /// connection was previously bound to.
    #[serde(rename_all = "camelCase")]
    Join { room_id: String, user_name: String },

    /// Replace the shared buffer with new text
    #[serde(rename_all = "camelCase")]
    CodeChange { room_id: String, code: String },

    /// Leave the currently joined room
    LeaveRoom,

    /// Typing presence signal, relayed to the rest of the room
    #[serde(rename_all = "camelCase")]
    Typing {
        room_id: String,
        user_name: String,
        socket_id: String,
    },

    /// Change the shared language selection
    #[serde(rename_all = "camelCase")]
    LanguageChange { room_id: String, language: String },

    /// Run the given code against the execution service
    #[serde(rename_all = "camelCase")]
    CompileCode {
        code: String,
        room_id: String,
        language: String,
        version: String,
    },
}

/// Events sent by the server.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Snapshot of the room, sent once to the joining connection only
    RoomState {
        users: Vec<String>,
        code: String,
        language: String,
    },

    /// Updated member list, broadcast to the room on every membership change
    UserJoined { users: Vec<String> },

    /// New buffer contents, broadcast to the room excluding the editor
    CodeUpdate { code: String },

    /// Typing presence relay, broadcast to the room excluding the sender.
    /// Receivers self-filter on `socket_id`.
    #[serde(rename_all = "camelCase")]
    UserTyping { user_name: String, socket_id: String },

    /// New language selection, broadcast to the room excluding the sender
    LanguageUpdate { language: String },

    /// Full execution service response, broadcast to the entire room
    /// including the requester
    CodeResponse {
        #[serde(flatten)]
        response: serde_json::Value,
    },

    /// Execution service failure, broadcast to the requesting room
    ExecutionError { message: String },

    /// Request-level error, sent to the originating connection only
    Error { message: String },
}
