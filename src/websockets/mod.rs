// Public API
pub use connection_manager::{ConnectionId, ConnectionManager, InMemoryConnectionManager};
pub use handler::{websocket_handler, WebsocketReceiveHandler};
pub use messages::{MessageType, WebSocketMessage};
pub use socket::{Connection, MessageHandler, SocketError, SocketFrame, SocketWrapper};
pub use websocket_chat_subscriber::WebSocketChatSubscriber;

// Internal modules
mod connection_manager;
pub mod event_handlers;
mod handler;
mod messages;
mod socket;
mod websocket_chat_subscriber;
