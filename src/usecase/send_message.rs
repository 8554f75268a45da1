//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（ブロードキャスト対象選定、タイムスタンプ刻印）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：送信者を含むルーム全メンバーに配送される
//! - 参加していないルームへの送信が破棄されることを確認
//! - タイムスタンプがブロードキャスト時にサーバーで刻印されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルームメンバーへのブロードキャスト（送信者含む）
//! - 異常系：未参加ルームへの送信（NotInRoom で破棄）
//! - エッジケース：送信者のみが参加している場合（自分だけに配送）

use std::sync::Arc;

use crate::{
    common::time::get_timestamp,
    domain::{
        ChatMessage, ConnectionId, MessagePusher, MessageText, RoomId, RoomMultiplexer,
        SenderName, Timestamp,
    },
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// RoomMultiplexer（ルーム台帳の抽象化）
    multiplexer: Arc<dyn RoomMultiplexer>,
    /// MessagePusher（メッセージ送出の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        multiplexer: Arc<dyn RoomMultiplexer>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            multiplexer,
            message_pusher,
        }
    }

    /// メッセージ送信を実行
    ///
    /// タイムスタンプはここで（＝ブロードキャスト時に）刻印します。
    /// 参照実装と同じく送信者自身も配送対象に含めます。送信者は
    /// 自分のメッセージがブロードキャストで返ってくることで
    /// 「送信確認」とします（ローカルエコーはしない）。
    ///
    /// # Arguments
    ///
    /// * `from` - 送信元の接続 ID
    /// * `room_id` - 宛先ルーム
    /// * `sender` - 送信者の表示名（クライアント申告値）
    /// * `text` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok((ChatMessage, Vec<ConnectionId>))` - 刻印済みメッセージと配送対象
    /// * `Err(SendMessageError::NotInRoom)` - 送信元が宛先ルームに未参加
    pub async fn execute(
        &self,
        from: &ConnectionId,
        room_id: RoomId,
        sender: SenderName,
        text: MessageText,
    ) -> Result<(ChatMessage, Vec<ConnectionId>), SendMessageError> {
        // 1. 宛先ルームの現在のメンバーを取得（送信者を含む）
        let members = self.multiplexer.members_of(&room_id).await;

        // 2. 送信元が宛先ルームに参加しているかチェック
        //    join 前の送信はプロトコル上は黙って破棄される
        if !members.iter().any(|id| id == from) {
            return Err(SendMessageError::NotInRoom);
        }

        // 3. タイムスタンプを刻印してメッセージを組み立てる
        let timestamp = Timestamp::new(get_timestamp());
        let message = ChatMessage::new(room_id, sender, text, timestamp);

        Ok((message, members))
    }

    /// 配送対象の全メンバーへメッセージをブロードキャストする
    ///
    /// # Arguments
    ///
    /// * `targets` - 配送対象の接続 ID リスト（送信者を含む）
    /// * `json_message` - 送出する JSON メッセージ（DTO 層で生成されたもの）
    pub async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        json_message: &str,
    ) -> Result<(), SendMessageError> {
        self.message_pusher
            .broadcast(targets, json_message)
            .await
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionRegistry, pusher::MockMessagePusher},
        infrastructure::registry::InMemoryRegistry,
    };

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    fn sender(name: &str) -> SenderName {
        SenderName::new(name.to_string()).unwrap()
    }

    fn text(value: &str) -> MessageText {
        MessageText::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_targets_include_sender() {
        // テスト項目: 配送対象にルーム全メンバー（送信者含む）が入る
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(MockMessagePusher::new()));

        // 3 人の接続を book-1 に参加させる
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();
        let charlie = ConnectionId::generate();
        registry.join(alice.clone(), room("book-1")).await;
        registry.join(bob.clone(), room("book-1")).await;
        registry.join(charlie.clone(), room("book-1")).await;

        // when (操作): alice がメッセージを送信
        let before = get_timestamp();
        let result = usecase
            .execute(&alice, room("book-1"), sender("alice"), text("hi"))
            .await;
        let after = get_timestamp();

        // then (期待する結果):
        let (message, targets) = result.unwrap();

        // 送信者を含む 3 人全員が配送対象
        assert_eq!(targets.len(), 3);
        assert!(targets.contains(&alice));
        assert!(targets.contains(&bob));
        assert!(targets.contains(&charlie));

        // タイムスタンプはブロードキャスト時にサーバーが刻印
        assert!(message.timestamp.value() >= before);
        assert!(message.timestamp.value() <= after);
        assert_eq!(message.sender.as_str(), "alice");
        assert_eq!(message.text.as_str(), "hi");
    }

    #[tokio::test]
    async fn test_send_message_before_join_is_rejected() {
        // テスト項目: 宛先ルームに未参加の送信は NotInRoom で破棄される
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(MockMessagePusher::new()));

        let alice = ConnectionId::generate();
        registry.register(alice.clone()).await;

        // when (操作): join せずに送信
        let result = usecase
            .execute(&alice, room("book-1"), sender("alice"), text("hi"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(SendMessageError::NotInRoom));
    }

    #[tokio::test]
    async fn test_send_message_to_other_room_is_rejected() {
        // テスト項目: 参加しているルームと違うルーム宛の送信は破棄される
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(MockMessagePusher::new()));

        let alice = ConnectionId::generate();
        registry.join(alice.clone(), room("book-1")).await;

        // when (操作): book-2 宛に送信
        let result = usecase
            .execute(&alice, room("book-2"), sender("alice"), text("hi"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(SendMessageError::NotInRoom));
    }

    #[tokio::test]
    async fn test_send_message_single_member_room() {
        // テスト項目: 送信者のみのルームでは配送対象は送信者だけ
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(MockMessagePusher::new()));

        let charlie = ConnectionId::generate();
        registry.join(charlie.clone(), room("book-2")).await;

        // when (操作):
        let result = usecase
            .execute(&charlie, room("book-2"), sender("charlie"), text("hey"))
            .await;

        // then (期待する結果):
        let (_message, targets) = result.unwrap();
        assert_eq!(targets, vec![charlie]);
    }

    #[tokio::test]
    async fn test_room_isolation() {
        // テスト項目: 別ルームのメンバーは配送対象に入らない
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let usecase =
            SendMessageUseCase::new(registry.clone(), Arc::new(MockMessagePusher::new()));

        let alice = ConnectionId::generate();
        let charlie = ConnectionId::generate();
        registry.join(alice.clone(), room("book-1")).await;
        registry.join(charlie.clone(), room("book-2")).await;

        // when (操作): alice が book-1 宛に送信
        let result = usecase
            .execute(&alice, room("book-1"), sender("alice"), text("hello"))
            .await;

        // then (期待する結果):
        let (_message, targets) = result.unwrap();
        assert_eq!(targets, vec![alice]);
        assert!(!targets.contains(&charlie));
    }

    #[tokio::test]
    async fn test_broadcast_delegates_to_pusher() {
        // テスト項目: broadcast が MessagePusher に配送を委譲する
        // given (前提条件):
        let registry = Arc::new(InMemoryRegistry::new());
        let mut pusher = MockMessagePusher::new();
        let alice = ConnectionId::generate();
        let expected_targets = vec![alice.clone()];
        pusher
            .expect_broadcast()
            .withf(move |targets, content| {
                targets == &expected_targets && content == r#"{"event":"receiveMessage"}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let usecase = SendMessageUseCase::new(registry, Arc::new(pusher));

        // when (操作):
        let result = usecase
            .broadcast(vec![alice], r#"{"event":"receiveMessage"}"#)
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
