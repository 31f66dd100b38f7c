use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::events::ChatEvent;

/// Event bus carrying chat events from connections to the dispatcher
///
/// Bounded and single-consumer: when the queue is full `emit` waits for the
/// dispatcher instead of dropping events.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: mpsc::Sender<ChatEvent>,
}

impl EventBus {
    /// Creates a bus with the specified capacity plus the receiver for the
    /// dispatcher
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ChatEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Queues an event for the dispatcher, waiting while the queue is full
    pub async fn emit(&self, event: ChatEvent) {
        let event_type = event.event_type();
        match self.sender.send(event).await {
            Ok(()) => {
                debug!(event_type = event_type, "Chat event emitted");
            }
            Err(_) => {
                warn!(event_type = event_type, "Chat event dropped, dispatcher has stopped");
            }
        }
    }

    /// Free slots left in the queue
    pub fn available_capacity(&self) -> usize {
        self.sender.capacity()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
