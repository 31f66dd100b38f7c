use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{
    history::HistoryLog,
    models::{HistoryEntry, MemberEntry, MemberStatus, PresencePayload},
    presence::PresenceTable,
};
use crate::shared::AppError;

struct ChatState {
    history: HistoryLog,
    /// `None` when presence tracking is disabled
    presence: Option<PresenceTable>,
}

/// Owner of the shared history log and presence table
///
/// One instance lives for the whole process and is injected wherever chat
/// state is read or written. Both collections sit behind a single lock so an
/// append and the snapshot that follows it are taken atomically.
pub struct ChatStore {
    state: RwLock<ChatState>,
    track_presence: bool,
}

impl ChatStore {
    pub fn new(track_presence: bool) -> Self {
        Self {
            state: RwLock::new(ChatState {
                history: HistoryLog::new(),
                presence: track_presence.then(PresenceTable::new),
            }),
            track_presence,
        }
    }

    pub fn tracks_presence(&self) -> bool {
        self.track_presence
    }

    /// Marks the member active, records the payload and returns the history
    /// including it
    #[instrument(skip(self, payload), fields(name = %payload.name()))]
    pub async fn enter(&self, payload: &PresencePayload) -> Vec<HistoryEntry> {
        let mut state = self.state.write().await;
        if let Some(presence) = state.presence.as_mut() {
            presence.set_status(payload.name(), MemberStatus::Active);
        }
        state.history.append(HistoryEntry::new(payload.raw().clone()));

        debug!(history_len = state.history.len(), "Member entered");
        state.history.all().to_vec()
    }

    #[instrument(skip(self, payload), fields(name = %payload.name()))]
    pub async fn exit(&self, payload: &PresencePayload) {
        let mut state = self.state.write().await;
        if let Some(presence) = state.presence.as_mut() {
            presence.set_status(payload.name(), MemberStatus::Inactive);
        }
        state.history.append(HistoryEntry::new(payload.raw().clone()));

        debug!(history_len = state.history.len(), "Member exited");
    }

    /// Marks the member idle. Idle changes are not recorded in history.
    #[instrument(skip(self, payload), fields(name = %payload.name()))]
    pub async fn idle(&self, payload: &PresencePayload) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let presence = state.presence.as_mut().ok_or(AppError::PresenceDisabled)?;
        presence.set_status(payload.name(), MemberStatus::Idle);

        debug!("Member idle");
        Ok(())
    }

    #[instrument(skip(self, payload))]
    pub async fn publish(&self, payload: Value) {
        let mut state = self.state.write().await;
        state.history.append(HistoryEntry::new(payload));

        debug!(history_len = state.history.len(), "Message recorded");
    }

    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.state.read().await.history.all().to_vec()
    }

    pub async fn history_len(&self) -> usize {
        self.state.read().await.history.len()
    }

    pub async fn members(&self) -> Result<Vec<MemberEntry>, AppError> {
        let state = self.state.read().await;
        state
            .presence
            .as_ref()
            .map(PresenceTable::list_statuses)
            .ok_or(AppError::PresenceDisabled)
    }
}
