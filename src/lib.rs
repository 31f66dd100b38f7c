// Library crate for the chat relay
// This file exposes the public API for the binary and integration tests

pub mod chat;
pub mod config;
pub mod event;
pub mod shared;
pub mod websockets;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use chat::ChatStore;
pub use config::RelayConfig;
pub use event::{ChatEvent, ChatSubscription, EventBus};
pub use shared::{AppError, AppState};
pub use websockets::{
    ConnectionId, ConnectionManager, InMemoryConnectionManager, MessageHandler, MessageType,
    WebSocketChatSubscriber, WebSocketMessage, WebsocketReceiveHandler,
};

/// Wires the chat store, connection manager and event bus together and starts
/// the single dispatch task
pub fn build_state(config: &RelayConfig) -> (AppState, JoinHandle<()>) {
    let chat_store = Arc::new(ChatStore::new(config.track_presence));
    let connection_manager: Arc<dyn ConnectionManager> = Arc::new(InMemoryConnectionManager::new());
    let (event_bus, event_receiver) = EventBus::new(config.event_capacity);

    let subscriber = WebSocketChatSubscriber::new(
        Arc::clone(&chat_store),
        Arc::clone(&connection_manager),
    );
    let dispatch_handle = ChatSubscription::new(Arc::new(subscriber), event_receiver).start();

    (
        AppState::new(chat_store, connection_manager, event_bus),
        dispatch_handle,
    )
}

/// HTTP and WebSocket routes
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Chat relay is running" }))
        .route("/health", get(chat::handlers::health))
        .route("/history", get(chat::handlers::get_history))
        .route("/members", get(chat::handlers::get_members))
        .route("/ws", get(websockets::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
