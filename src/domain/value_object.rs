//! 値オブジェクト定義
//!
//! チャットコアで使う値オブジェクト。生成時にバリデーションを行い、
//! 不正な値がドメイン内に入り込まないようにします。

use std::fmt;

use uuid::Uuid;

/// RoomId の最大長
const ROOM_ID_MAX_LEN: usize = 128;
/// SenderName の最大長
const SENDER_NAME_MAX_LEN: usize = 128;
/// MessageText の最大長
const MESSAGE_TEXT_MAX_LEN: usize = 4096;

/// 値オブジェクトのバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} exceeds maximum length of {1}")]
    TooLong(&'static str, usize),
}

/// サーバーが接続ごとに採番する一意な識別子
///
/// 接続確立時に UUID v4 で生成され、切断まで変わりません。
/// クライアントから与えられる値ではありません。
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい ConnectionId を採番する
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ルーム識別子（= 本の ID）
///
/// ルームは最初の join で暗黙的に作られるため、RoomId 自体に
/// 存在チェックはありません。空文字のみ拒否します。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::Empty("room id"));
        }
        if value.len() > ROOM_ID_MAX_LEN {
            return Err(ValueObjectError::TooLong("room id", ROOM_ID_MAX_LEN));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 送信者の表示名
///
/// チャットプロトコルでは認証を行わないため、クライアントが申告した
/// 表示名をそのまま信頼します（参照実装と同じトラストモデル）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::Empty("sender name"));
        }
        if value.len() > SENDER_NAME_MAX_LEN {
            return Err(ValueObjectError::TooLong(
                "sender name",
                SENDER_NAME_MAX_LEN,
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SenderName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// メッセージ本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::Empty("message text"));
        }
        if value.len() > MESSAGE_TEXT_MAX_LEN {
            return Err(ValueObjectError::TooLong(
                "message text",
                MESSAGE_TEXT_MAX_LEN,
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// UNIX タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
