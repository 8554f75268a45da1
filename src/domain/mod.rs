//! ドメイン層
//!
//! チャットコアの値オブジェクト・エンティティと、
//! コアが依存するインターフェース（trait）を定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod pusher;
pub mod registry;
pub mod value_object;

pub use entity::ChatMessage;
pub use pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use registry::{ConnectionRegistry, RoomMultiplexer};
pub use value_object::{
    ConnectionId, MessageText, RoomId, SenderName, Timestamp, ValueObjectError,
};
