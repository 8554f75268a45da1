//! WebSocket wire format.
//!
//! Client payloads arrive as JSON tagged with an explicit `event` field and
//! are validated at the boundary; anything that does not parse into
//! [`ClientEvent`] is dropped by the handler. The only server-to-client
//! event is `receiveMessage`.

use serde::{Deserialize, Serialize};

use crate::{common::time::timestamp_to_rfc3339, domain::ChatMessage};

/// client → server のイベント
///
/// `event` フィールドをタグとする tagged enum。未知のイベント名や
/// フィールド欠落はデシリアライズエラーになり、境界で破棄されます。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ClientEvent {
    /// 本のチャットルームへの参加
    #[serde(rename = "joinBookChat")]
    JoinBookChat {
        #[serde(rename = "bookId")]
        book_id: String,
    },
    /// メッセージ送信
    #[serde(rename = "sendMessage")]
    SendMessage {
        #[serde(rename = "bookId")]
        book_id: String,
        user: String,
        message: String,
    },
}

/// server → client のイベント名
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "receiveMessage")]
    ReceiveMessage,
}

/// server → client: ルームの全メンバーに配送されるメッセージ
///
/// `timestamp` はサーバーがブロードキャスト時に刻印した RFC 3339 文字列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveMessageEvent {
    pub event: EventType,
    pub user: String,
    pub message: String,
    pub timestamp: String,
}

// Domain Model → DTO
impl From<ChatMessage> for ReceiveMessageEvent {
    fn from(message: ChatMessage) -> Self {
        Self {
            event: EventType::ReceiveMessage,
            user: message.sender.into_string(),
            message: message.text.into_string(),
            timestamp: timestamp_to_rfc3339(message.timestamp.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageText, RoomId, SenderName, Timestamp};

    #[test]
    fn test_parse_join_book_chat_event() {
        // テスト項目: joinBookChat イベントが正しくパースされる
        // given (前提条件):
        let json = r#"{"event":"joinBookChat","bookId":"book-42"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::JoinBookChat {
                book_id: "book-42".to_string()
            }
        );
    }

    #[test]
    fn test_parse_send_message_event() {
        // テスト項目: sendMessage イベントが正しくパースされる
        // given (前提条件):
        let json = r#"{"event":"sendMessage","bookId":"book-42","user":"alice","message":"hi"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::SendMessage {
                book_id: "book-42".to_string(),
                user: "alice".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        // テスト項目: 未知のイベント名はデシリアライズエラーになる
        // given (前提条件):
        let json = r#"{"event":"leaveBookChat","bookId":"book-42"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // テスト項目: フィールド欠落のペイロードはデシリアライズエラーになる
        // given (前提条件):
        let json = r#"{"event":"sendMessage","bookId":"book-42"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_message_to_receive_message_event() {
        // テスト項目: ChatMessage が receiveMessage イベントに変換される
        // given (前提条件):
        let message = ChatMessage::new(
            RoomId::new("book-1".to_string()).unwrap(),
            SenderName::new("alice".to_string()).unwrap(),
            MessageText::new("hello".to_string()).unwrap(),
            Timestamp::new(1672531200000),
        );

        // when (操作):
        let event = ReceiveMessageEvent::from(message);

        // then (期待する結果):
        assert_eq!(event.event, EventType::ReceiveMessage);
        assert_eq!(event.user, "alice");
        assert_eq!(event.message, "hello");
        assert!(event.timestamp.starts_with("2023-01-01T00:00:00"));
    }

    #[test]
    fn test_receive_message_event_wire_shape() {
        // テスト項目: receiveMessage イベントのワイヤー形式（event/user/message/timestamp）
        // given (前提条件):
        let event = ReceiveMessageEvent {
            event: EventType::ReceiveMessage,
            user: "alice".to_string(),
            message: "hi".to_string(),
            timestamp: "2023-01-01T00:00:00+00:00".to_string(),
        };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event"], "receiveMessage");
        assert_eq!(value["user"], "alice");
        assert_eq!(value["message"], "hi");
        assert_eq!(value["timestamp"], "2023-01-01T00:00:00+00:00");
    }
}
