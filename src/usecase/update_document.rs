//! UseCase: ドキュメント変更処理
//!
//! 共有バッファの変更は last-write-wins：ベクタクロックもマージもなく、
//! 後に処理された変更イベントが無条件に勝つ。既存クライアントはこの
//! 上書きセマンティクスに依存しているため、OT/CRDT 的なマージを
//! 導入してはならない。

use std::sync::Arc;

use crate::domain::{RepositoryError, RoomId, RoomStore};

use super::error::UpdateRoomError;

/// ドキュメント変更のユースケース
pub struct UpdateDocumentUseCase {
    rooms: Arc<dyn RoomStore>,
}

impl UpdateDocumentUseCase {
    /// 新しい UpdateDocumentUseCase を作成
    pub fn new(rooms: Arc<dyn RoomStore>) -> Self {
        Self { rooms }
    }

    /// ドキュメント変更を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 上書き成功
    /// * `Err(UpdateRoomError::RoomNotFound)` - ルームが存在しない
    pub async fn execute(&self, room_id: &RoomId, text: String) -> Result<(), UpdateRoomError> {
        self.rooms
            .set_document(room_id, text)
            .await
            .map_err(|_: RepositoryError| {
                UpdateRoomError::RoomNotFound(room_id.as_str().to_string())
            })
    }
}
