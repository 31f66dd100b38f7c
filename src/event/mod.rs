// Event-driven plumbing between the WebSocket layer and the chat store
//
// Inbound frames become `ChatEvent`s on the `EventBus`; a single
// `ChatSubscription` task hands them, one at a time, to a `ChatEventHandler`.

// Public API - what other modules can use
pub use bus::EventBus;
pub use events::ChatEvent;
pub use handler::{ChatEventError, ChatEventHandler};
pub use subscription::ChatSubscription;

// Internal modules
mod bus;
mod events;
mod handler;
mod subscription;
