use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    chat::{ChatStore, PresencePayload},
    event::ChatEventError,
    websockets::{
        connection_manager::{ConnectionId, ConnectionManager},
        messages::WebSocketMessage,
    },
};

use super::shared::MessageBroadcaster;

pub struct PresenceEventHandlers {
    chat_store: Arc<ChatStore>,
    connection_manager: Arc<dyn ConnectionManager>,
}

impl PresenceEventHandlers {
    pub fn new(chat_store: Arc<ChatStore>, connection_manager: Arc<dyn ConnectionManager>) -> Self {
        Self {
            chat_store,
            connection_manager,
        }
    }

    /// Others see the enter payload; the newcomer gets the full history
    pub async fn handle_member_entered(
        &self,
        connection_id: &ConnectionId,
        payload: PresencePayload,
    ) -> Result<(), ChatEventError> {
        info!(
            connection_id = %connection_id,
            name = %payload.name(),
            "Handling enter event"
        );

        let history = self.chat_store.enter(&payload).await;

        MessageBroadcaster::broadcast_to_others(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::enter(payload.into_raw()),
        )
        .await?;

        MessageBroadcaster::send_to_connection(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::history(history),
        )
        .await
    }

    pub async fn handle_member_exited(
        &self,
        connection_id: &ConnectionId,
        payload: PresencePayload,
    ) -> Result<(), ChatEventError> {
        info!(
            connection_id = %connection_id,
            name = %payload.name(),
            "Handling exit event"
        );

        self.chat_store.exit(&payload).await;

        MessageBroadcaster::broadcast_to_others(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::exit(payload.into_raw()),
        )
        .await
    }

    pub async fn handle_member_idled(
        &self,
        connection_id: &ConnectionId,
        payload: PresencePayload,
    ) -> Result<(), ChatEventError> {
        info!(
            connection_id = %connection_id,
            name = %payload.name(),
            "Handling idle event"
        );

        if let Err(e) = self.chat_store.idle(&payload).await {
            warn!(connection_id = %connection_id, error = %e, "Idle event rejected");
            return MessageBroadcaster::reply_error(
                &self.connection_manager,
                connection_id,
                e.to_string(),
            )
            .await;
        }

        MessageBroadcaster::broadcast_to_others(
            &self.connection_manager,
            connection_id,
            &WebSocketMessage::idle(payload.into_raw()),
        )
        .await
    }

    pub async fn handle_members_requested(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(), ChatEventError> {
        match self.chat_store.members().await {
            Ok(members) => {
                MessageBroadcaster::send_to_connection(
                    &self.connection_manager,
                    connection_id,
                    &WebSocketMessage::members(&members)?,
                )
                .await
            }
            Err(e) => {
                warn!(connection_id = %connection_id, error = %e, "Members request rejected");
                MessageBroadcaster::reply_error(
                    &self.connection_manager,
                    connection_id,
                    e.to_string(),
                )
                .await
            }
        }
    }
}
