use serde_json::{json, Value};
use tokio::time::{sleep, Duration};

use chat_relay::websockets::{MessageHandler, MessageType, WebSocketMessage};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a raw text frame from a connection and wait for processing
    pub async fn send_raw(&self, label: &str, frame: &str) {
        self.input_handler
            .handle_message(self.connection(label), frame.to_string())
            .await;
        sleep(Duration::from_millis(10)).await;
    }

    /// Send a WebSocket message and wait for processing
    pub async fn send_message(&self, label: &str, message: WebSocketMessage) {
        let message_json = serde_json::to_string(&message).unwrap();
        self.send_raw(label, &message_json).await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn send_enter(&self, label: &str, name: &str) {
        self.send_message(
            label,
            WebSocketMessage::new(MessageType::EnterEvent, json!({ "name": name })),
        )
        .await;
    }

    pub async fn send_exit(&self, label: &str, name: &str) {
        self.send_message(
            label,
            WebSocketMessage::new(MessageType::ExitEvent, json!({ "name": name })),
        )
        .await;
    }

    pub async fn send_idle(&self, label: &str, name: &str) {
        self.send_message(
            label,
            WebSocketMessage::new(MessageType::IdleEvent, json!({ "name": name })),
        )
        .await;
    }

    pub async fn send_publish(&self, label: &str, payload: Value) {
        self.send_message(
            label,
            WebSocketMessage::new(MessageType::PublishEvent, payload),
        )
        .await;
    }

    /// Request history with a payload-less frame
    pub async fn request_history(&self, label: &str) {
        self.send_raw(label, r#"{"type":"historyEvent"}"#).await;
    }

    pub async fn request_members(&self, label: &str) {
        self.send_raw(label, r#"{"type":"getMembersEvent"}"#).await;
    }
}
