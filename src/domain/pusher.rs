//! メッセージ送出のインターフェース定義
//!
//! ドメイン層が必要とするクライアントへのメッセージ送出のインターフェース。
//! 具体的な実装（WebSocket）は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::value_object::ConnectionId;

/// クライアントへメッセージを届けるためのチャンネル
///
/// WebSocket の送信タスクへ JSON 文字列を渡す `UnboundedSender`。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ送出エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessagePushError {
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// MessagePusher trait
///
/// ブロードキャストは fire-and-forget：呼び出し側に「N 人に届いた」と
/// 「ルームが空だった」の区別を返しません。一部の送信失敗も許容します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録する
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// クライアントの送信チャンネルを登録解除する（冪等）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 対象の全クライアントにメッセージを送出する
    ///
    /// 個々の送信失敗は警告ログに留め、全体としては成功を返します。
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
