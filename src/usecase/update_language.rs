//! UseCase: 言語変更処理
//!
//! 言語選択もドキュメントと同じ last-write-wins で上書きされる。

use std::sync::Arc;

use crate::domain::{Language, RepositoryError, RoomId, RoomStore};

use super::error::UpdateRoomError;

/// 言語変更のユースケース
pub struct UpdateLanguageUseCase {
    rooms: Arc<dyn RoomStore>,
}

impl UpdateLanguageUseCase {
    /// 新しい UpdateLanguageUseCase を作成
    pub fn new(rooms: Arc<dyn RoomStore>) -> Self {
        Self { rooms }
    }

    /// 言語変更を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 上書き成功
    /// * `Err(UpdateRoomError::RoomNotFound)` - ルームが存在しない
    pub async fn execute(
        &self,
        room_id: &RoomId,
        language: Language,
    ) -> Result<(), UpdateRoomError> {
        self.rooms
            .set_language(room_id, language)
            .await
            .map_err(|_: RepositoryError| {
                UpdateRoomError::RoomNotFound(room_id.as_str().to_string())
            })
    }
}
