//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::Value;

use chat_relay::websockets::{MessageType, WebSocketMessage};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    labels: Vec<&'a str>,
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for every connection in the setup
    pub fn for_all_connections(setup: &'a TestSetup) -> Self {
        Self {
            labels: setup.labels(),
            setup,
        }
    }

    /// Create an assertion for specific connections
    pub fn for_connections(setup: &'a TestSetup, labels: Vec<&'a str>) -> Self {
        Self { setup, labels }
    }

    /// Assert that connections received a specific message type (consumes the message from queue)
    pub async fn received_message_type(self, expected_type: MessageType) -> MessageContent {
        let mut messages = vec![];

        for label in &self.labels {
            let message = self
                .setup
                .mock_conn_manager
                .consume_message_for(&self.setup.connection(label))
                .await;
            assert!(
                message.is_some(),
                "{} should have received a message",
                label
            );

            let msg: WebSocketMessage = serde_json::from_str(&message.unwrap()).unwrap();
            assert_eq!(
                msg.message_type, expected_type,
                "{} received wrong message type",
                label
            );
            messages.push(msg);
        }

        // Everyone addressed by one event sees the same payload
        if messages.len() > 1 {
            let first_payload = &messages[0].payload;
            for (i, msg) in messages.iter().enumerate().skip(1) {
                assert_eq!(
                    &msg.payload, first_payload,
                    "Connection {} payload differs from connection {}",
                    self.labels[i], self.labels[0]
                );
            }
        }

        MessageContent {
            payload: messages[0].payload.clone(),
        }
    }

    /// Assert that connections have no pending messages
    pub async fn received_no_messages(self) {
        for label in &self.labels {
            let messages = self
                .setup
                .mock_conn_manager
                .get_messages_for(&self.setup.connection(label))
                .await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                label,
                messages
            );
        }
    }
}

// ============================================================================
// Message Content Assertions
// ============================================================================

pub struct MessageContent {
    payload: Value,
}

impl MessageContent {
    /// Assert the payload equals the expected JSON exactly
    pub fn with_payload(self, expected: Value) -> Self {
        assert_eq!(self.payload, expected);
        self
    }

    /// Assert the errorEvent carries a message containing `fragment`
    pub fn with_error_containing(self, fragment: &str) -> Self {
        let message = self.payload["message"].as_str().unwrap_or_default();
        assert!(
            message.contains(fragment),
            "error message {:?} does not contain {:?}",
            message,
            fragment
        );
        self
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}
