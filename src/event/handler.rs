use async_trait::async_trait;
use thiserror::Error;

use super::events::ChatEvent;

/// Errors that can occur when handling chat events
#[derive(Debug, Error)]
pub enum ChatEventError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ChatEventError {
    fn from(e: serde_json::Error) -> Self {
        ChatEventError::SerializationError(e.to_string())
    }
}

/// Trait for components that react to chat events
///
/// Handlers are driven by a single `ChatSubscription` task, so each call
/// runs to completion before the next event is delivered.
#[async_trait]
pub trait ChatEventHandler: Send + Sync {
    async fn handle_chat_event(&self, event: ChatEvent) -> Result<(), ChatEventError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
