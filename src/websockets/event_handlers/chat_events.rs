use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    chat::ChatStore,
    event::ChatEventError,
    websockets::{
        connection_manager::{ConnectionId, ConnectionManager},
        messages::WebSocketMessage,
    },
};

use super::shared::MessageBroadcaster;

pub struct ChatEventHandlers {
    chat_store: Arc<ChatStore>,
    connection_manager: Arc<dyn ConnectionManager>,
}

impl ChatEventHandlers {
    pub fn new(chat_store: Arc<ChatStore>, connection_manager: Arc<dyn ConnectionManager>) -> Self {
        Self {
            chat_store,
            connection_manager,
        }
    }

    /// Records the payload and delivers it to everyone, sender included
    pub async fn handle_message_published(
        &self,
        connection_id: &ConnectionId,
        payload: Value,
    ) -> Result<(), ChatEventError> {
        info!(connection_id = %connection_id, "Handling publish event");

        self.chat_store.publish(payload.clone()).await;

        MessageBroadcaster::broadcast_to_all(
            &self.connection_manager,
            &WebSocketMessage::publish(payload),
        )
        .await
    }

    pub async fn handle_history_requested(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(), ChatEventError> {
        let history = self.chat_store.history().await;

        debug!(
            connection_id = %connection_id,
            history_len = history.len(),
            "History requested"
        );

        MessageBroadcaster::send_to_connection(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::history(history),
        )
        .await
    }
}
