//! エンティティ定義

use super::value_object::{MessageText, RoomId, SenderName, Timestamp};

/// チャットメッセージ
///
/// 永続化されない一時的な値。ブロードキャストのファンアウトの間だけ
/// 存在します。タイムスタンプは送信時刻ではなく、サーバーが
/// ブロードキャスト時に刻印します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// 宛先ルーム（= 本の ID）
    pub room_id: RoomId,
    /// 送信者の表示名（クライアント申告値）
    pub sender: SenderName,
    /// メッセージ本文
    pub text: MessageText,
    /// サーバーがブロードキャスト時に刻印したタイムスタンプ
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// 新しい ChatMessage を作成
    pub fn new(room_id: RoomId, sender: SenderName, text: MessageText, timestamp: Timestamp) -> Self {
        Self {
            room_id,
            sender,
            text,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_holds_all_fields() {
        // テスト項目: ChatMessage が全てのフィールドを保持する
        // given (前提条件):
        let room_id = RoomId::new("book-1".to_string()).unwrap();
        let sender = SenderName::new("alice".to_string()).unwrap();
        let text = MessageText::new("hello".to_string()).unwrap();
        let timestamp = Timestamp::new(1000);

        // when (操作):
        let message = ChatMessage::new(room_id.clone(), sender.clone(), text.clone(), timestamp);

        // then (期待する結果):
        assert_eq!(message.room_id, room_id);
        assert_eq!(message.sender, sender);
        assert_eq!(message.text, text);
        assert_eq!(message.timestamp, timestamp);
    }
}
