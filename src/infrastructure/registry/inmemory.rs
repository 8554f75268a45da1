//! InMemory 接続レジストリ実装
//!
//! ドメイン層が定義する ConnectionRegistry / RoomMultiplexer trait の
//! 具体的な実装。接続とルームの台帳を一つの Mutex で守ることで、
//! 同一ルームに対する join / leave / メンバー取得の不可分性を保証します。
//!
//! ルームは最初の join で暗黙的に作られ、メンバーが空になったら
//! エントリごと破棄します（不在と空集合は観測上等価）。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomId, RoomMultiplexer};

/// 接続・ルーム台帳
///
/// 双方向のインデックスを持ちます。connections は接続から参加ルームへ、
/// rooms はルームからメンバー接続へ。unregister 時に両方を同時に
/// 更新するため、同じ Mutex の下に置いています。
#[derive(Debug, Default)]
struct RegistryState {
    /// 接続 ID → 参加中ルームの集合
    connections: HashMap<ConnectionId, HashSet<RoomId>>,
    /// ルーム ID → メンバー接続の集合
    rooms: HashMap<RoomId, HashSet<ConnectionId>>,
}

/// インメモリ接続レジストリ
///
/// プロセス内で唯一の共有可変状態。サーバー起動時に一度だけ作られ、
/// グローバル変数ではなく明示的に各ハンドラへ渡されます。
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    state: Mutex<RegistryState>,
}

impl InMemoryRegistry {
    /// 新しい InMemoryRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryRegistry {
    async fn register(&self, connection_id: ConnectionId) {
        let mut state = self.state.lock().await;
        state.connections.entry(connection_id).or_default();
    }

    async fn unregister(&self, connection_id: &ConnectionId) {
        let mut state = self.state.lock().await;

        // 参加していた全ルームから取り除く。2 回目以降の呼び出しは no-op
        let Some(joined_rooms) = state.connections.remove(connection_id) else {
            return;
        };
        for room_id in joined_rooms {
            if let Some(members) = state.rooms.get_mut(&room_id) {
                members.remove(connection_id);
                if members.is_empty() {
                    state.rooms.remove(&room_id);
                }
            }
        }
    }

    async fn rooms_of(&self, connection_id: &ConnectionId) -> Vec<RoomId> {
        let state = self.state.lock().await;
        state
            .connections
            .get(connection_id)
            .map(|rooms| rooms.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn count_connections(&self) -> usize {
        let state = self.state.lock().await;
        state.connections.len()
    }
}

#[async_trait]
impl RoomMultiplexer for InMemoryRegistry {
    async fn join(&self, connection_id: ConnectionId, room_id: RoomId) {
        let mut state = self.state.lock().await;

        // 未登録の接続からの join は台帳を作ってから参加させる
        state
            .connections
            .entry(connection_id.clone())
            .or_default()
            .insert(room_id.clone());
        state
            .rooms
            .entry(room_id)
            .or_default()
            .insert(connection_id);
    }

    async fn leave(&self, connection_id: &ConnectionId, room_id: &RoomId) {
        let mut state = self.state.lock().await;

        if let Some(joined_rooms) = state.connections.get_mut(connection_id) {
            joined_rooms.remove(room_id);
        }
        if let Some(members) = state.rooms.get_mut(room_id) {
            members.remove(connection_id);
            if members.is_empty() {
                state.rooms.remove(room_id);
            }
        }
    }

    async fn members_of(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn active_rooms(&self) -> Vec<RoomId> {
        let state = self.state.lock().await;
        state.rooms.keys().cloned().collect()
    }
}
