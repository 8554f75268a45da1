//! 接続レジストリとルーム多重化のインターフェース定義
//!
//! ドメイン層が必要とする接続・ルーム管理のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::value_object::{ConnectionId, RoomId};

/// 接続レジストリ
///
/// 生きているクライアント接続と、その接続が参加しているルーム集合を
/// 管理します。接続は register で生まれ、unregister で消えます。
///
/// ## 契約
///
/// - `register` は空のルーム参加集合を持つ接続レコードを作る
/// - `unregister` は参加していた全てのルームから接続を取り除いた上で
///   レコードを破棄する。冪等（2 回目以降は no-op）でエラーを返さない
/// - I/O は行わない。純粋な台帳管理のみ
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続を登録する（ルーム参加集合は空で初期化される）
    async fn register(&self, connection_id: ConnectionId);

    /// 接続を破棄する（全ルームからの退出を含む。冪等）
    async fn unregister(&self, connection_id: &ConnectionId);

    /// 接続が参加しているルームの一覧を取得する
    async fn rooms_of(&self, connection_id: &ConnectionId) -> Vec<RoomId>;

    /// 登録中の接続数を取得する
    async fn count_connections(&self) -> usize;
}

/// ルーム多重化
///
/// 本の ID をキーに、そのルームに参加中の接続集合を管理します。
///
/// ## 契約
///
/// - `join` はルームが無ければ暗黙的に作る。既に参加済みなら no-op（冪等）。
///   一つの接続が複数ルームに同時参加できる
/// - `leave` は参加を取り除く。メンバーが空になったルームは破棄してよい
///   （ルームの不在と空のメンバー集合は観測上等価）
/// - `members_of` は現在のメンバー集合（空もあり得る）を返す
/// - 同一ルームに対する join / leave は互いに不可分（アトミック）に適用される
#[async_trait]
pub trait RoomMultiplexer: Send + Sync {
    /// 接続をルームに参加させる（冪等）
    async fn join(&self, connection_id: ConnectionId, room_id: RoomId);

    /// 接続をルームから退出させる
    async fn leave(&self, connection_id: &ConnectionId, room_id: &RoomId);

    /// ルームの現在のメンバー集合を取得する
    async fn members_of(&self, room_id: &RoomId) -> Vec<ConnectionId>;

    /// メンバーが 1 人以上いるルームの一覧を取得する
    async fn active_rooms(&self) -> Vec<RoomId>;
}
