// Shared chat state: the history log and the presence table

pub use history::HistoryLog;
pub use models::{HistoryEntry, MemberEntry, MemberStatus, PresencePayload};
pub use presence::PresenceTable;
pub use store::ChatStore;

pub mod handlers;
pub mod history;
pub mod models;
pub mod presence;
pub mod store;
