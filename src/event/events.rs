use serde_json::Value;

use crate::chat::PresencePayload;
use crate::websockets::ConnectionId;

/// Events produced by client connections, in the order they reached the relay
///
/// Every event carries the id of the connection it came from so replies and
/// partial broadcasts can be addressed.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A member joined the room (`enterEvent`)
    MemberEntered {
        connection_id: ConnectionId,
        payload: PresencePayload,
    },

    /// A member left the room (`exitEvent`)
    MemberExited {
        connection_id: ConnectionId,
        payload: PresencePayload,
    },

    /// A member went idle (`idleEvent`)
    MemberIdled {
        connection_id: ConnectionId,
        payload: PresencePayload,
    },

    /// A chat message was posted (`publishEvent`)
    MessagePublished {
        connection_id: ConnectionId,
        payload: Value,
    },

    /// The connection asked for the full history (`historyEvent`)
    HistoryRequested { connection_id: ConnectionId },

    /// The connection asked for the presence snapshot (`getMembersEvent`)
    MembersRequested { connection_id: ConnectionId },

    /// The connection sent something the relay could not accept
    InvalidMessage {
        connection_id: ConnectionId,
        reason: String,
    },
}

impl ChatEvent {
    /// The connection that produced this event
    pub fn connection_id(&self) -> ConnectionId {
        match self {
            ChatEvent::MemberEntered { connection_id, .. }
            | ChatEvent::MemberExited { connection_id, .. }
            | ChatEvent::MemberIdled { connection_id, .. }
            | ChatEvent::MessagePublished { connection_id, .. }
            | ChatEvent::HistoryRequested { connection_id }
            | ChatEvent::MembersRequested { connection_id }
            | ChatEvent::InvalidMessage { connection_id, .. } => *connection_id,
        }
    }

    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            ChatEvent::MemberEntered { .. } => "member_entered",
            ChatEvent::MemberExited { .. } => "member_exited",
            ChatEvent::MemberIdled { .. } => "member_idled",
            ChatEvent::MessagePublished { .. } => "message_published",
            ChatEvent::HistoryRequested { .. } => "history_requested",
            ChatEvent::MembersRequested { .. } => "members_requested",
            ChatEvent::InvalidMessage { .. } => "invalid_message",
        }
    }
}
