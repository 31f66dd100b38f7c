use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::chat::{HistoryEntry, MemberEntry};

/// Event names used on the wire
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MessageType {
    // Both directions
    EnterEvent,
    ExitEvent,
    PublishEvent,
    HistoryEvent,
    GetMembersEvent,
    IdleEvent,

    // Server -> Client
    ErrorEvent,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
}

/// Envelope for every WebSocket frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Missing payloads deserialize as `null`
    #[serde(default)]
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<WebSocketMessageMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

/// Helper functions for creating outbound messages
impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
            }),
        }
    }

    /// Create an enterEvent rebroadcast
    pub fn enter(payload: Value) -> Self {
        Self::new(MessageType::EnterEvent, payload)
    }

    /// Create an exitEvent rebroadcast
    pub fn exit(payload: Value) -> Self {
        Self::new(MessageType::ExitEvent, payload)
    }

    /// Create an idleEvent rebroadcast
    pub fn idle(payload: Value) -> Self {
        Self::new(MessageType::IdleEvent, payload)
    }

    /// Create a publishEvent rebroadcast
    pub fn publish(payload: Value) -> Self {
        Self::new(MessageType::PublishEvent, payload)
    }

    /// Create a historyEvent reply
    pub fn history(entries: Vec<HistoryEntry>) -> Self {
        let payload = Value::Array(entries.into_iter().map(HistoryEntry::into_value).collect());
        Self::new(MessageType::HistoryEvent, payload)
    }

    /// Create a getMembersEvent reply
    pub fn members(entries: &[MemberEntry]) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            MessageType::GetMembersEvent,
            serde_json::to_value(entries)?,
        ))
    }

    /// Create an errorEvent reply
    pub fn error(message: String) -> Result<Self, serde_json::Error> {
        let payload = ErrorPayload { message };
        Ok(Self::new(
            MessageType::ErrorEvent,
            serde_json::to_value(payload)?,
        ))
    }
}
