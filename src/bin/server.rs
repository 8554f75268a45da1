//! Per-book WebSocket chat server for a virtual bookshelf.
//!
//! Clients join a room keyed by a book id and exchange ephemeral messages
//! that are broadcast to every current room member (sender included).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use shoko::{
    common::logger::setup_logger,
    infrastructure::{message_pusher::WebSocketMessagePusher, registry::InMemoryRegistry},
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, RoomQueryUseCase,
        SendMessageUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Per-book WebSocket chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry (connection and room bookkeeping)
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Registry (single in-memory instance, passed explicitly)
    let registry = Arc::new(InMemoryRegistry::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(registry.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let room_query_usecase = Arc::new(RoomQueryUseCase::new(registry.clone()));

    // 4. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        disconnect_client_usecase,
        join_room_usecase,
        send_message_usecase,
        room_query_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
