//! UseCase 層
//!
//! 接続ライフサイクル（connect → join → send → disconnect）の
//! 各イベントを処理するユースケースを定義します。

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod join_room;
pub mod room_query;
pub mod send_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::SendMessageError;
pub use join_room::JoinRoomUseCase;
pub use room_query::RoomQueryUseCase;
pub use send_message::SendMessageUseCase;
