//! Broadcast channel over the connection registry.
//!
//! Three delivery scopes: one connection, a whole room, and a room minus the
//! sender. Delivery is fire-and-forget through each connection's unbounded
//! sender channel; a send failure only means that connection is tearing down.

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, RoomId},
    infrastructure::dto::websocket::ServerEvent,
};

/// Fan-out helper over the connection registry.
pub struct Broadcaster {
    connections: Arc<dyn ConnectionRegistry>,
}

impl Broadcaster {
    /// Create a new Broadcaster.
    pub fn new(connections: Arc<dyn ConnectionRegistry>) -> Self {
        Self { connections }
    }

    /// Send an event to a single connection.
    pub async fn send_to(&self, connection_id: &ConnectionId, event: &ServerEvent) {
        let Some(json) = encode(event) else { return };
        if let Some(sender) = self.connections.sender(connection_id).await
            && sender.send(json).is_err()
        {
            tracing::warn!("Failed to send event to connection '{}'", connection_id);
        }
    }

    /// Send an event to every connection in the room, sender included.
    pub async fn broadcast_room(&self, room_id: &RoomId, event: &ServerEvent) {
        self.fan_out(room_id, None, event).await;
    }

    /// Send an event to every connection in the room except `exclude`.
    pub async fn broadcast_room_except(
        &self,
        room_id: &RoomId,
        exclude: &ConnectionId,
        event: &ServerEvent,
    ) {
        self.fan_out(room_id, Some(exclude), event).await;
    }

    async fn fan_out(&self, room_id: &RoomId, exclude: Option<&ConnectionId>, event: &ServerEvent) {
        let Some(json) = encode(event) else { return };
        // Broadcasting to a deleted room reaches no connections; that is the
        // intended no-op for results outliving their room.
        for (connection_id, sender) in self.connections.connections_in_room(room_id).await {
            if exclude.is_some_and(|excluded| excluded == &connection_id) {
                continue;
            }
            if sender.send(json.clone()).is_err() {
                tracing::warn!("Failed to send event to connection '{}'", connection_id);
            }
        }
    }
}

fn encode(event: &ServerEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize server event: {}", e);
            None
        }
    }
}
