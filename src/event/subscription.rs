use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::{events::ChatEvent, handler::ChatEventHandler};

/// Single dispatch context for chat events
///
/// Owns the only receiver feeding the handler, so all state changes and
/// fan-out happen in event arrival order.
pub struct ChatSubscription {
    handler: Arc<dyn ChatEventHandler>,
    receiver: mpsc::Receiver<ChatEvent>,
}

impl ChatSubscription {
    pub fn new(handler: Arc<dyn ChatEventHandler>, receiver: mpsc::Receiver<ChatEvent>) -> Self {
        Self { handler, receiver }
    }

    /// Start the subscription - spawns a background task that listens to chat
    /// events and routes them to the handler
    pub fn start(self) -> JoinHandle<()> {
        let handler = self.handler;
        let handler_name = handler.handler_name();
        let mut receiver = self.receiver;

        info!(handler = handler_name, "Starting chat subscription");

        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                let event_type = event.event_type();
                let connection_id = event.connection_id();

                if let Err(e) = handler.handle_chat_event(event).await {
                    error!(
                        handler = handler_name,
                        event_type = event_type,
                        connection_id = %connection_id,
                        error = %e,
                        "Chat event handler failed"
                    );
                }
            }

            warn!(handler = handler_name, "Chat subscription ended - no more events");
        })
    }
}
