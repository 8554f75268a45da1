//! UseCase: ルーム参加処理
//!
//! `joinBookChat` イベントに対応します。ルームは最初の join で
//! 暗黙的に作られ、参加済みルームへの再 join は no-op です。

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomId, RoomMultiplexer};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// RoomMultiplexer（ルーム台帳の抽象化）
    multiplexer: Arc<dyn RoomMultiplexer>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(multiplexer: Arc<dyn RoomMultiplexer>) -> Self {
        Self { multiplexer }
    }

    /// ルーム参加を実行
    ///
    /// 失敗しません。未知のルームはエラーではなく暗黙作成です。
    pub async fn execute(&self, connection_id: ConnectionId, room_id: RoomId) {
        tracing::info!(
            "Connection '{}' joined room '{}'",
            connection_id,
            room_id.as_str()
        );
        self.multiplexer.join(connection_id, room_id).await;
    }
}
