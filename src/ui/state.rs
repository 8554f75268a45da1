//! Server state and connection management.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, RoomQueryUseCase,
    SendMessageUseCase,
};

/// Shared application state
///
/// Constructed once at startup and passed explicitly into every handler;
/// there is no global mutable state.
pub struct AppState {
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// RoomQueryUseCase（ルーム状態参照のユースケース）
    pub room_query_usecase: Arc<RoomQueryUseCase>,
}
