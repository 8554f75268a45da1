//! UseCase 層のエラー定義

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendMessageError {
    /// 送信元の接続が宛先ルームに参加していない
    ///
    /// プロトコル上はエラー応答を返さず、ハンドラが警告ログを出して
    /// メッセージを破棄します。
    #[error("sender connection is not a member of the target room")]
    NotInRoom,
    /// ブロードキャストに失敗した
    #[error("failed to broadcast message: {0}")]
    BroadcastFailed(String),
}
