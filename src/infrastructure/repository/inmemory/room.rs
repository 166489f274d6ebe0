//! InMemory Room Store 実装
//!
//! ドメイン層が定義する RoomStore trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ルームの全変更は内部の Mutex を通るため、同一ルームに対する変更が
//! 命令レベルで交錯することはありません（単一ライターセマンティクス）。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    common::time::get_unix_timestamp_millis,
    domain::{
        ConnectionId, Language, Participant, RepositoryError, Room, RoomId, RoomStore, Timestamp,
    },
};

/// インメモリ Room Store 実装
///
/// 「ルームは参加者が 1 人以上いる間だけ存在する」という不変条件を保持する。
/// 最後の参加者の削除とルームの削除は同一のロック区間内で行われるため、
/// 空のルームが外部から観測されることはありません。
pub struct InMemoryRoomStore {
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomStore {
    /// 新しい InMemoryRoomStore を作成
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn get_or_create(&self, room_id: RoomId) -> Room {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::new(room_id, Timestamp::new(get_unix_timestamp_millis())))
            .clone()
    }

    async fn get(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn add_participant(
        &self,
        room_id: &RoomId,
        participant: Participant,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        room.add_participant(participant);
        Ok(())
    }

    async fn remove_participant(&self, room_id: &RoomId, connection_id: &ConnectionId) -> usize {
        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get_mut(room_id) else {
            return 0;
        };
        room.remove_participant(connection_id);
        let remaining = room.participants.len();
        if remaining == 0 {
            rooms.remove(room_id);
        }
        remaining
    }

    async fn set_document(&self, room_id: &RoomId, text: String) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        room.document = text;
        Ok(())
    }

    async fn set_language(
        &self,
        room_id: &RoomId,
        language: Language,
    ) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        room.language = language;
        Ok(())
    }

    async fn set_last_output(&self, room_id: &RoomId, output: String) {
        let mut rooms = self.rooms.lock().await;
        // A room deleted while an execution was in flight stays deleted.
        if let Some(room) = rooms.get_mut(room_id) {
            room.last_output = Some(output);
        }
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }

    async fn room_count(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }
}
