//! InMemory Connection Registry 実装
//!
//! 各 WebSocket 接続の送信チャンネルと、接続が現在バインドしている
//! (ルーム, 表示名) を追跡します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{ConnectionBinding, ConnectionId, ConnectionRegistry, RoomId, UserName};

/// 1 接続分のレジストリエントリ
struct ConnectionEntry {
    /// Message sender channel
    sender: UnboundedSender<String>,
    /// Room binding, `None` until the first join
    binding: Option<ConnectionBinding>,
}

/// インメモリ Connection Registry 実装
pub struct InMemoryConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, ConnectionEntry>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection_id: ConnectionId, sender: UnboundedSender<String>) {
        let mut connections = self.connections.lock().await;
        connections.insert(
            connection_id,
            ConnectionEntry {
                sender,
                binding: None,
            },
        );
    }

    async fn bind(&self, connection_id: &ConnectionId, room_id: RoomId, name: UserName) {
        let mut connections = self.connections.lock().await;
        // Unknown connection means the transport already closed; nothing to do.
        if let Some(entry) = connections.get_mut(connection_id) {
            entry.binding = Some(ConnectionBinding { room_id, name });
        }
    }

    async fn unbind(&self, connection_id: &ConnectionId) -> Option<ConnectionBinding> {
        let mut connections = self.connections.lock().await;
        connections
            .get_mut(connection_id)
            .and_then(|entry| entry.binding.take())
    }

    async fn binding(&self, connection_id: &ConnectionId) -> Option<ConnectionBinding> {
        let connections = self.connections.lock().await;
        connections
            .get(connection_id)
            .and_then(|entry| entry.binding.clone())
    }

    async fn remove(&self, connection_id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        connections.remove(connection_id);
    }

    async fn sender(&self, connection_id: &ConnectionId) -> Option<UnboundedSender<String>> {
        let connections = self.connections.lock().await;
        connections
            .get(connection_id)
            .map(|entry| entry.sender.clone())
    }

    async fn connections_in_room(
        &self,
        room_id: &RoomId,
    ) -> Vec<(ConnectionId, UnboundedSender<String>)> {
        let connections = self.connections.lock().await;
        connections
            .iter()
            .filter(|(_, entry)| {
                entry
                    .binding
                    .as_ref()
                    .is_some_and(|b| &b.room_id == room_id)
            })
            .map(|(id, entry)| (id.clone(), entry.sender.clone()))
            .collect()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}
