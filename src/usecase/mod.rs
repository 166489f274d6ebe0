//! UseCase 層
//!
//! セッションコーディネータの遷移ロジックを実装するレイヤー。
//! UI 層（WebSocket ハンドラ）から呼び出され、Domain 層を操作します。

pub mod error;
pub mod execute_code;
pub mod join_room;
pub mod leave_room;
pub mod update_document;
pub mod update_language;

pub use error::{ExecuteCodeError, UpdateRoomError};
pub use execute_code::ExecuteCodeUseCase;
pub use join_room::{JoinOutcome, JoinRoomUseCase, PreviousRoom};
pub use leave_room::{LeaveOutcome, LeaveRoomUseCase};
pub use update_document::UpdateDocumentUseCase;
pub use update_language::UpdateLanguageUseCase;
