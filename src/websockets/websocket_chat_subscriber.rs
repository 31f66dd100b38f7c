use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    chat::ChatStore,
    event::{ChatEvent, ChatEventError, ChatEventHandler},
    websockets::connection_manager::ConnectionManager,
};

use super::event_handlers::{shared::MessageBroadcaster, ChatEventHandlers, PresenceEventHandlers};

/// WebSocket-specific chat event handler
///
/// Routes each event to a specialized handler:
/// - PresenceEventHandlers: enter, exit, idle, member list
/// - ChatEventHandlers: publish, history
/// Rejected frames are answered with an errorEvent here.
pub struct WebSocketChatSubscriber {
    presence_handlers: PresenceEventHandlers,
    chat_handlers: ChatEventHandlers,
    connection_manager: Arc<dyn ConnectionManager>,
}

impl WebSocketChatSubscriber {
    pub fn new(chat_store: Arc<ChatStore>, connection_manager: Arc<dyn ConnectionManager>) -> Self {
        let presence_handlers =
            PresenceEventHandlers::new(Arc::clone(&chat_store), Arc::clone(&connection_manager));
        let chat_handlers =
            ChatEventHandlers::new(Arc::clone(&chat_store), Arc::clone(&connection_manager));

        Self {
            presence_handlers,
            chat_handlers,
            connection_manager,
        }
    }
}

#[async_trait]
impl ChatEventHandler for WebSocketChatSubscriber {
    async fn handle_chat_event(&self, event: ChatEvent) -> Result<(), ChatEventError> {
        debug!(event = ?event, "Handling chat event for WebSocket connections");

        match event {
            ChatEvent::MemberEntered {
                connection_id,
                payload,
            } => {
                self.presence_handlers
                    .handle_member_entered(&connection_id, payload)
                    .await
            }
            ChatEvent::MemberExited {
                connection_id,
                payload,
            } => {
                self.presence_handlers
                    .handle_member_exited(&connection_id, payload)
                    .await
            }
            ChatEvent::MemberIdled {
                connection_id,
                payload,
            } => {
                self.presence_handlers
                    .handle_member_idled(&connection_id, payload)
                    .await
            }
            ChatEvent::MembersRequested { connection_id } => {
                self.presence_handlers
                    .handle_members_requested(&connection_id)
                    .await
            }
            ChatEvent::MessagePublished {
                connection_id,
                payload,
            } => {
                self.chat_handlers
                    .handle_message_published(&connection_id, payload)
                    .await
            }
            ChatEvent::HistoryRequested { connection_id } => {
                self.chat_handlers
                    .handle_history_requested(&connection_id)
                    .await
            }
            ChatEvent::InvalidMessage {
                connection_id,
                reason,
            } => {
                warn!(connection_id = %connection_id, reason = %reason, "Replying with error");
                MessageBroadcaster::reply_error(&self.connection_manager, &connection_id, reason)
                    .await
            }
        }
    }

    fn handler_name(&self) -> &'static str {
        "WebSocketChatSubscriber"
    }
}
