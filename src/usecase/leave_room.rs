//! UseCase: ルーム退出処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - ルーム退出処理（バインド解除、参加者削除、空ルームの削除）
//!
//! ### なぜこのテストが必要か
//! - 明示的な leaveRoom と transport 切断が同じ遷移を共有するため、
//!   退出セマンティクスを一箇所で保証する必要がある
//! - 最後の参加者の退出でルームがストアから消えることを検証
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者が残るルームからの退出
//! - エッジケース：最後の参加者の退出、バインドされていない接続の退出

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomId, RoomStore};

/// Result of leaving a room.
#[derive(Debug, Clone)]
pub struct LeaveOutcome {
    /// Room the connection left
    pub room_id: RoomId,
    /// Survivors' display names; empty when the room was deleted
    pub remaining_users: Vec<String>,
}

/// ルーム退出のユースケース
///
/// 明示的な `leaveRoom` イベントと transport 切断の両方から呼ばれる。
pub struct LeaveRoomUseCase {
    rooms: Arc<dyn RoomStore>,
    connections: Arc<dyn ConnectionRegistry>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(rooms: Arc<dyn RoomStore>, connections: Arc<dyn ConnectionRegistry>) -> Self {
        Self { rooms, connections }
    }

    /// ルーム退出を実行
    ///
    /// # Returns
    ///
    /// * `Some(LeaveOutcome)` - 退出が行われた（通知用の生存者リスト付き）
    /// * `None` - 接続はどのルームにもバインドされていなかった（no-op）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<LeaveOutcome> {
        let binding = self.connections.unbind(connection_id).await?;

        let remaining = self
            .rooms
            .remove_participant(&binding.room_id, connection_id)
            .await;

        let remaining_users = if remaining > 0 {
            self.rooms
                .get(&binding.room_id)
                .await
                .map(|room| room.user_names())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        Some(LeaveOutcome {
            room_id: binding.room_id,
            remaining_users,
        })
    }
}
