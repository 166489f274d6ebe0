//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルーム参加処理（暗黙の退出、ルーム作成、参加者追加、バインド）
//!
//! ### なぜこのテストが必要か
//! - 「接続は常に最大 1 ルームにのみ属する」という不変条件の検証
//! - 以前のルームへのゴースト参加（退出せずに別ルームへ join）を防ぐ
//! - 新規ルームがプレースホルダ状態で作られることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：初回参加、既存ルームへの参加
//! - エッジケース：別ルームへの再参加（暗黙の退出）、同一ルームへの再参加

use std::sync::Arc;

use crate::{
    common::time::get_unix_timestamp_millis,
    domain::{
        ConnectionId, ConnectionRegistry, Participant, RepositoryError, Room, RoomId, RoomStore,
        Timestamp, UserName,
    },
};

/// Result of joining a room.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    /// Snapshot of the joined room, including the new participant
    pub room: Room,
    /// Set when the connection was implicitly removed from a *different*
    /// room that still has participants to notify
    pub previous_room: Option<PreviousRoom>,
}

/// A room the connection left implicitly as part of a join.
#[derive(Debug, Clone)]
pub struct PreviousRoom {
    pub room_id: RoomId,
    pub remaining_users: Vec<String>,
}

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    rooms: Arc<dyn RoomStore>,
    connections: Arc<dyn ConnectionRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(rooms: Arc<dyn RoomStore>, connections: Arc<dyn ConnectionRegistry>) -> Self {
        Self { rooms, connections }
    }

    /// ルーム参加を実行
    ///
    /// 既に別ルームにバインドされている接続は、まずそのルームから暗黙に
    /// 退出させる（接続は常に最大 1 ルーム）。その後ルームを取得または
    /// 作成し、参加者を追加して接続をバインドする。
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続の ID
    /// * `room_id` - 参加先ルームの ID
    /// * `name` - ルーム内で使う表示名
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room_id: RoomId,
        name: UserName,
    ) -> JoinOutcome {
        // 1. Implicit leave of any prior room
        let previous_room = match self.connections.unbind(connection_id).await {
            Some(previous) => {
                let remaining = self
                    .rooms
                    .remove_participant(&previous.room_id, connection_id)
                    .await;
                if previous.room_id != room_id && remaining > 0 {
                    let remaining_users = self
                        .rooms
                        .get(&previous.room_id)
                        .await
                        .map(|room| room.user_names())
                        .unwrap_or_default();
                    Some(PreviousRoom {
                        room_id: previous.room_id,
                        remaining_users,
                    })
                } else {
                    None
                }
            }
            None => None,
        };

        // 2. Create the room if needed and add the participant. The freshly
        //    created room can vanish in between if another connection joins
        //    and leaves it first, so recreate on RoomNotFound.
        let joined_at = Timestamp::new(get_unix_timestamp_millis());
        let participant = Participant::new(connection_id.clone(), name.clone(), joined_at);
        loop {
            self.rooms.get_or_create(room_id.clone()).await;
            match self
                .rooms
                .add_participant(&room_id, participant.clone())
                .await
            {
                Ok(()) => break,
                Err(RepositoryError::RoomNotFound(_)) => continue,
                Err(_) => break,
            }
        }

        // 3. Bind the connection to its new room
        self.connections
            .bind(connection_id, room_id.clone(), name)
            .await;

        // 4. Snapshot for the roomState reply and userJoined broadcast
        let room = match self.rooms.get(&room_id).await {
            Some(room) => room,
            None => self.rooms.get_or_create(room_id).await,
        };

        JoinOutcome {
            room,
            previous_room,
        }
    }
}
