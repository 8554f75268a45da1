//! UseCase: クライアント切断処理
//!
//! 切断イベントで接続を台帳から破棄し、参加していた全ルームから
//! 退出させます。切断は冪等で、二重に呼ばれてもエラーになりません。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// ConnectionRegistry（接続台帳の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ送出の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// クライアント切断を実行
    ///
    /// 1. レジストリから接続を破棄（全ルームからの退出を含む）
    /// 2. MessagePusher から送出チャンネルを登録解除
    ///
    /// どちらも冪等なので、この処理全体も冪等です。
    pub async fn execute(&self, connection_id: &ConnectionId) {
        self.registry.unregister(connection_id).await;
        self.message_pusher.unregister_client(connection_id).await;
        tracing::info!("Connection '{}' disconnected", connection_id);
    }
}
