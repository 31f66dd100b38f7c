pub mod chat_events;
pub mod presence_events;
pub mod shared;

pub use chat_events::ChatEventHandlers;
pub use presence_events::PresenceEventHandlers;
