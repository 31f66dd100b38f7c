#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

use chat_relay::{
    chat::ChatStore,
    event::{ChatSubscription, EventBus},
    websockets::{ConnectionId, WebSocketChatSubscriber, WebsocketReceiveHandler},
};

use super::mocks::MockConnectionManager;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub event_bus: EventBus,
    pub chat_store: Arc<ChatStore>,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub input_handler: WebsocketReceiveHandler,
    /// Test label -> connection id, in connection order
    pub connections: Vec<(String, ConnectionId)>,
    pub _subscription_handle: JoinHandle<()>,
}

impl TestSetup {
    pub fn connection(&self, label: &str) -> ConnectionId {
        self.connections
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, id)| *id)
            .unwrap_or_else(|| panic!("no connection labelled {}", label))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.connections.iter().map(|(l, _)| l.as_str()).collect()
    }
}

pub struct TestSetupBuilder {
    connections: Vec<String>,
    track_presence: bool,
    event_capacity: usize,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            connections: vec![],
            track_presence: true,
            event_capacity: 100,
        }
    }

    pub fn with_connections(mut self, labels: Vec<&str>) -> Self {
        self.connections = labels.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_two_connections(self) -> Self {
        self.with_connections(vec!["a", "b"])
    }

    pub fn with_three_connections(self) -> Self {
        self.with_connections(vec!["a", "b", "c"])
    }

    pub fn without_presence(mut self) -> Self {
        self.track_presence = false;
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub async fn build(self) -> TestSetup {
        let (event_bus, event_receiver) = EventBus::new(self.event_capacity);
        let chat_store = Arc::new(ChatStore::new(self.track_presence));
        let mock_conn_manager = Arc::new(MockConnectionManager::new());

        let mut connections = Vec::new();
        for label in self.connections {
            let connection_id = ConnectionId::new();
            mock_conn_manager.add_connected(connection_id).await;
            connections.push((label, connection_id));
        }

        let input_handler = WebsocketReceiveHandler::new(event_bus.clone());

        let output_subscriber =
            WebSocketChatSubscriber::new(chat_store.clone(), mock_conn_manager.clone());

        let subscription = ChatSubscription::new(Arc::new(output_subscriber), event_receiver);
        let subscription_handle = subscription.start();

        TestSetup {
            event_bus,
            chat_store,
            mock_conn_manager,
            input_handler,
            connections,
            _subscription_handle: subscription_handle,
        }
    }
}
