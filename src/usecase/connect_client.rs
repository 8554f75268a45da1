//! UseCase: クライアント接続処理
//!
//! 接続確立時に ConnectionId を採番し、レジストリと MessagePusher の
//! 両方に登録します。参照実装と違い、識別子はクライアント申告ではなく
//! サーバー採番（UUID v4）です。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, PusherChannel};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// ConnectionRegistry（接続台帳の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ送出の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// クライアント接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送出用チャンネル
    ///
    /// # Returns
    ///
    /// 採番された ConnectionId。採番はサーバー側で行うため失敗しません。
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();

        // 1. レジストリに接続を登録（ルーム参加集合は空で初期化）
        self.registry.register(connection_id.clone()).await;

        // 2. MessagePusher に送出チャンネルを登録
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        connection_id
    }
}
