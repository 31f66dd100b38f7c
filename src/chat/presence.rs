use indexmap::IndexMap;

use super::models::{MemberEntry, MemberStatus};

/// Last-write-wins mapping from member name to status
///
/// Iteration follows the order in which each name was first set; overwriting
/// a status keeps the name in its original position.
#[derive(Debug, Default, Clone)]
pub struct PresenceTable {
    statuses: IndexMap<String, MemberStatus>,
}

impl PresenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, name: impl Into<String>, status: MemberStatus) {
        self.statuses.insert(name.into(), status);
    }

    pub fn status_of(&self, name: &str) -> Option<MemberStatus> {
        self.statuses.get(name).copied()
    }

    pub fn list_statuses(&self) -> Vec<MemberEntry> {
        self.statuses
            .iter()
            .map(|(name, status)| MemberEntry(name.clone(), *status))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
