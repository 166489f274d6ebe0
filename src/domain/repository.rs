//! Repository traits owned by the domain layer.
//!
//! The UseCase layer depends on these traits, not on the in-memory
//! implementations in the infrastructure layer (dependency inversion).

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::{Participant, Room},
    error::RepositoryError,
    value_object::{ConnectionId, Language, RoomId, UserName},
};

/// The room a connection has joined and the name it joined under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionBinding {
    pub room_id: RoomId,
    pub name: UserName,
}

/// Store of all live rooms.
///
/// A room exists in the store if and only if at least one connection is a
/// member of it; implementations must delete a room in the same call that
/// removes its last participant.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Return the room with the given id, creating it with placeholder
    /// state when absent. Returns a snapshot.
    async fn get_or_create(&self, room_id: RoomId) -> Room;

    /// Return a snapshot of the room, if present.
    async fn get(&self, room_id: &RoomId) -> Option<Room>;

    /// Add a participant to the room. Idempotent per connection.
    async fn add_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
    ) -> Result<(), RepositoryError>;

    /// Remove a participant by connection identity and return the number of
    /// participants remaining. Deletes the room when it becomes empty, as
    /// part of this call.
    async fn remove_participant(&self, room_id: &RoomId, connection_id: &ConnectionId) -> usize;

    /// Overwrite the shared document (last-write-wins).
    async fn set_document(&self, room_id: &RoomId, text: String) -> Result<(), RepositoryError>;

    /// Overwrite the selected language (last-write-wins).
    async fn set_language(
        &self,
        room_id: &RoomId,
        language: Language,
    ) -> Result<(), RepositoryError>;

    /// Record the output of the most recent completed execution.
    ///
    /// Silently a no-op when the room no longer exists: a late execution
    /// result must not resurrect a deleted room.
    async fn set_last_output(&self, room_id: &RoomId, output: String);

    /// Snapshots of all live rooms.
    async fn list_rooms(&self) -> Vec<Room>;

    /// Number of live rooms.
    async fn room_count(&self) -> usize;
}

/// Registry of live transport connections.
///
/// Tracks the outbound sender channel for each connection together with its
/// current room binding, if any. A connection is bound to at most one room.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a freshly opened connection with no room binding.
    async fn register(&self, connection_id: ConnectionId, sender: UnboundedSender<String>);

    /// Bind a connection to a room. No-op when the connection is unknown
    /// (already closed).
    async fn bind(&self, connection_id: &ConnectionId, room_id: RoomId, name: UserName);

    /// Clear a connection's binding, returning the prior one for cleanup.
    /// Returns `None` when the connection had no binding.
    async fn unbind(&self, connection_id: &ConnectionId) -> Option<ConnectionBinding>;

    /// The connection's current binding, if any.
    async fn binding(&self, connection_id: &ConnectionId) -> Option<ConnectionBinding>;

    /// Delete the connection entirely (transport closed).
    async fn remove(&self, connection_id: &ConnectionId);

    /// Outbound sender for a single connection.
    async fn sender(&self, connection_id: &ConnectionId) -> Option<UnboundedSender<String>>;

    /// Outbound senders for every connection currently bound to the room.
    async fn connections_in_room(
        &self,
        room_id: &RoomId,
    ) -> Vec<(ConnectionId, UnboundedSender<String>)>;

    /// Number of live connections.
    async fn count(&self) -> usize;
}
