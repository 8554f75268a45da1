//! WebSocket connection handlers.
//!
//! One task pair per connection: a receive loop that dispatches inbound
//! events in arrival order (preserving per-connection ordering), and a push
//! loop that forwards broadcasts from other connections to this client's
//! socket.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageText, RoomId, SenderName},
    infrastructure::dto::websocket::{ClientEvent, ReceiveMessageEvent},
    ui::state::AppState,
    usecase::SendMessageError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: messages broadcast by
/// other connections (via rx channel) are sent to this client's WebSocket
/// connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Register the connection; the server allocates the id
    let connection_id = state.connect_client_usecase.execute(tx).await;
    tracing::info!("Connection '{}' established and registered", connection_id);

    // Spawn a task to push messages from other clients to this client
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_client_event(&state_clone, &connection_id_clone, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Release all room memberships and discard the connection record
    state.disconnect_client_usecase.execute(&connection_id).await;
}

/// Dispatch one inbound event to its handler.
///
/// Events are processed synchronously on this connection's receive loop, so
/// events from a single connection are applied in the order they were sent.
/// Malformed payloads are dropped here at the transport boundary with a warn
/// log; no error is reported back to the client.
async fn dispatch_client_event(state: &Arc<AppState>, connection_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(
                "Dropping malformed payload from connection '{}': {}",
                connection_id,
                e
            );
            return;
        }
    };

    match event {
        ClientEvent::JoinBookChat { book_id } => {
            let room_id = match RoomId::try_from(book_id) {
                Ok(room_id) => room_id,
                Err(e) => {
                    tracing::warn!(
                        "Dropping joinBookChat from connection '{}': {}",
                        connection_id,
                        e
                    );
                    return;
                }
            };

            state
                .join_room_usecase
                .execute(connection_id.clone(), room_id)
                .await;
        }
        ClientEvent::SendMessage {
            book_id,
            user,
            message,
        } => {
            // Convert String -> Domain Models; invalid fields are dropped
            // at the boundary
            let (room_id, sender_name, message_text) = match (
                RoomId::try_from(book_id),
                SenderName::try_from(user),
                MessageText::try_from(message),
            ) {
                (Ok(room_id), Ok(sender_name), Ok(message_text)) => {
                    (room_id, sender_name, message_text)
                }
                (room_id, sender_name, message_text) => {
                    let e = room_id
                        .err()
                        .or(sender_name.err())
                        .or(message_text.err())
                        .expect("at least one conversion failed");
                    tracing::warn!(
                        "Dropping sendMessage from connection '{}': {}",
                        connection_id,
                        e
                    );
                    return;
                }
            };

            match state
                .send_message_usecase
                .execute(connection_id, room_id, sender_name, message_text)
                .await
            {
                Ok((chat_message, targets)) => {
                    tracing::info!(
                        "Broadcasting message from '{}' to {} member(s) of room '{}'",
                        chat_message.sender.as_str(),
                        targets.len(),
                        chat_message.room_id.as_str()
                    );

                    // Domain Model から DTO への変換
                    let event = ReceiveMessageEvent::from(chat_message);
                    let json = serde_json::to_string(&event).unwrap();

                    if let Err(e) = state.send_message_usecase.broadcast(targets, &json).await {
                        tracing::warn!("Failed to broadcast message: {}", e);
                    }
                }
                Err(SendMessageError::NotInRoom) => {
                    // send before join: dropped silently on the wire
                    tracing::warn!(
                        "Dropping sendMessage from connection '{}': not a member of the target room",
                        connection_id
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to send message: {}", e);
                }
            }
        }
    }
}
