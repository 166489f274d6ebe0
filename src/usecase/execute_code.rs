//! UseCase: コード実行処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ExecuteCodeUseCase::execute() メソッド
//! - 実行サービス呼び出しと lastOutput の更新
//!
//! ### なぜこのテストが必要か
//! - 成功時のみ lastOutput が更新されることを保証（失敗は以前の値を残す）
//! - 存在しないルームからのリクエストが実行サービスに届かないことを検証
//! - 実行中にルームが消えても結果の書き込みがルームを復活させないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：実行成功、結果の保存
//! - 異常系：実行サービスの失敗（タイムアウト、非 2xx、不正なレスポンス）
//! - エッジケース：実行中のルーム削除

use std::sync::Arc;

use crate::domain::{
    ExecutionOutcome, ExecutionRequest, ExecutionService, RoomId, RoomStore,
};

use super::error::ExecuteCodeError;

/// コード実行のユースケース
///
/// 同一ルームに対する複数の実行リクエストは排他されず並行に走る。
/// 結果はリクエスト順ではなく完了順に到着し、lastOutput には最後に
/// 完了した結果が残る。
pub struct ExecuteCodeUseCase {
    rooms: Arc<dyn RoomStore>,
    executor: Arc<dyn ExecutionService>,
}

impl ExecuteCodeUseCase {
    /// 新しい ExecuteCodeUseCase を作成
    pub fn new(rooms: Arc<dyn RoomStore>, executor: Arc<dyn ExecutionService>) -> Self {
        Self { rooms, executor }
    }

    /// コード実行を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 結果を配送するルームの ID
    /// * `request` - 実行サービスへ転送するリクエスト
    ///
    /// # Returns
    ///
    /// * `Ok(ExecutionOutcome)` - 実行成功（lastOutput 更新済み）
    /// * `Err(ExecuteCodeError)` - ルーム不在または実行サービスの失敗
    pub async fn execute(
        &self,
        room_id: &RoomId,
        request: ExecutionRequest,
    ) -> Result<ExecutionOutcome, ExecuteCodeError> {
        // 1. ルームの存在チェック（不在なら実行サービスを呼ばない）
        if self.rooms.get(room_id).await.is_none() {
            return Err(ExecuteCodeError::RoomNotFound(
                room_id.as_str().to_string(),
            ));
        }

        // 2. 外部実行サービスの呼び出し。リトライはしない。
        let outcome = self.executor.execute(request).await?;

        // 3. 成功時のみ lastOutput を更新。実行中にルームが消えていたら
        //    何も書かれない（set_last_output 側で保証）。
        self.rooms
            .set_last_output(room_id, outcome.output.clone())
            .await;

        Ok(outcome)
    }
}
