use crate::{
    event::ChatEventError,
    websockets::{
        connection_manager::{ConnectionId, ConnectionManager},
        messages::WebSocketMessage,
    },
};
use std::sync::Arc;

/// The three delivery modes of the relay
pub struct MessageBroadcaster;

impl MessageBroadcaster {
    /// Deliver to the originating connection only
    pub async fn send_to_connection(
        connection_manager: &Arc<dyn ConnectionManager>,
        connection_id: &ConnectionId,
        message: &WebSocketMessage,
    ) -> Result<(), ChatEventError> {
        let message_json = serde_json::to_string(message)?;
        connection_manager
            .send_to_connection(connection_id, &message_json)
            .await;
        Ok(())
    }

    /// Partial broadcast: every connection except the sender
    pub async fn broadcast_to_others(
        connection_manager: &Arc<dyn ConnectionManager>,
        sender: &ConnectionId,
        message: &WebSocketMessage,
    ) -> Result<(), ChatEventError> {
        let message_json = serde_json::to_string(message)?;
        connection_manager
            .broadcast_except(sender, &message_json)
            .await;
        Ok(())
    }

    /// Full broadcast: every connection including the sender
    pub async fn broadcast_to_all(
        connection_manager: &Arc<dyn ConnectionManager>,
        message: &WebSocketMessage,
    ) -> Result<(), ChatEventError> {
        let message_json = serde_json::to_string(message)?;
        connection_manager.broadcast_all(&message_json).await;
        Ok(())
    }

    /// Reply with an errorEvent
    pub async fn reply_error(
        connection_manager: &Arc<dyn ConnectionManager>,
        connection_id: &ConnectionId,
        reason: String,
    ) -> Result<(), ChatEventError> {
        let message = WebSocketMessage::error(reason)?;
        Self::send_to_connection(connection_manager, connection_id, &message).await
    }
}
