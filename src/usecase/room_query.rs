//! UseCase: ルーム状態の参照
//!
//! HTTP の観測用エンドポイント（`/api/rooms` など）のための読み取り専用
//! ユースケース。チャットプロトコル自体はこの情報を使いません。

use std::sync::Arc;

use crate::domain::{ConnectionId, RoomId, RoomMultiplexer};

/// ルーム状態参照のユースケース
pub struct RoomQueryUseCase {
    /// RoomMultiplexer（ルーム台帳の抽象化）
    multiplexer: Arc<dyn RoomMultiplexer>,
}

impl RoomQueryUseCase {
    /// 新しい RoomQueryUseCase を作成
    pub fn new(multiplexer: Arc<dyn RoomMultiplexer>) -> Self {
        Self { multiplexer }
    }

    /// アクティブなルームの一覧を（ルーム ID でソートして）取得する
    pub async fn list_rooms(&self) -> Vec<(RoomId, usize)> {
        let mut rooms = Vec::new();
        for room_id in self.multiplexer.active_rooms().await {
            let member_count = self.multiplexer.members_of(&room_id).await.len();
            rooms.push((room_id, member_count));
        }
        // Sort by room id for consistent ordering
        rooms.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        rooms
    }

    /// ルームの現在のメンバーを取得する
    ///
    /// 存在しないルームは空のメンバー集合と観測上等価なので、
    /// エラーではなく空リストを返します。
    pub async fn room_members(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.multiplexer.members_of(room_id).await
    }
}
