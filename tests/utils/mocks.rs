#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use chat_relay::websockets::{ConnectionId, ConnectionManager};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Records every frame addressed to each connection, in delivery order
#[derive(Clone)]
pub struct MockConnectionManager {
    sent_messages: Arc<RwLock<HashMap<ConnectionId, VecDeque<String>>>>,
    connected: Arc<RwLock<Vec<ConnectionId>>>,
}

impl MockConnectionManager {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(RwLock::new(HashMap::new())),
            connected: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn add_connected(&self, connection_id: ConnectionId) {
        self.connected.write().await.push(connection_id);
    }

    pub async fn get_messages_for(&self, connection_id: &ConnectionId) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .get(connection_id)
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Pops the oldest message delivered to the connection
    pub async fn consume_message_for(&self, connection_id: &ConnectionId) -> Option<String> {
        self.sent_messages
            .write()
            .await
            .get_mut(connection_id)
            .and_then(|queue| queue.pop_front())
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }

    async fn push(&self, connection_id: ConnectionId, message: &str) {
        self.sent_messages
            .write()
            .await
            .entry(connection_id)
            .or_default()
            .push_back(message.to_string());
    }
}

#[async_trait]
impl ConnectionManager for MockConnectionManager {
    async fn add_connection(
        &self,
        connection_id: ConnectionId,
        _sender: mpsc::UnboundedSender<String>,
    ) {
        self.add_connected(connection_id).await;
    }

    async fn remove_connection(&self, connection_id: &ConnectionId) {
        self.connected.write().await.retain(|c| c != connection_id);
    }

    async fn send_to_connection(&self, connection_id: &ConnectionId, message: &str) {
        self.push(*connection_id, message).await;
    }

    async fn broadcast_except(&self, excluded: &ConnectionId, message: &str) {
        let connected = self.connected.read().await.clone();
        for connection_id in connected.into_iter().filter(|c| c != excluded) {
            self.push(connection_id, message).await;
        }
    }

    async fn broadcast_all(&self, message: &str) {
        let connected = self.connected.read().await.clone();
        for connection_id in connected {
            self.push(connection_id, message).await;
        }
    }

    async fn connection_count(&self) -> usize {
        self.connected.read().await.len()
    }
}
