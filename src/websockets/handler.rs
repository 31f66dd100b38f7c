use async_trait::async_trait;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::chat::PresencePayload;
use crate::event::{ChatEvent, EventBus};
use crate::shared::{AppError, AppState};
use crate::websockets::messages::MessageType;

use super::connection_manager::ConnectionId;
use super::socket::{Connection, MessageHandler, SocketWrapper};

/// Inbound envelope, read loosely so unknown event names can be reported
#[derive(Debug, Deserialize)]
struct InboundMessage {
    #[serde(rename = "type")]
    message_type: String,
    #[serde(default)]
    payload: Value,
}

/// Message handler for receiving WebSocket messages from the client
///
/// Turns every text frame into exactly one `ChatEvent` on the bus. Frames
/// that cannot be accepted become `ChatEvent::InvalidMessage` so the error
/// reply is ordered with everything else the connection receives.
pub struct WebsocketReceiveHandler {
    event_bus: EventBus,
}

impl WebsocketReceiveHandler {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }

    fn parse_event(connection_id: ConnectionId, message: &str) -> Result<ChatEvent, AppError> {
        let inbound: InboundMessage = serde_json::from_str(message)
            .map_err(|e| AppError::InvalidPayload(format!("malformed message: {}", e)))?;

        let message_type = MessageType::from_str(&inbound.message_type)
            .map_err(|_| AppError::UnknownEvent(inbound.message_type.clone()))?;

        let event = match message_type {
            MessageType::EnterEvent => ChatEvent::MemberEntered {
                connection_id,
                payload: PresencePayload::from_value(inbound.payload)?,
            },
            MessageType::ExitEvent => ChatEvent::MemberExited {
                connection_id,
                payload: PresencePayload::from_value(inbound.payload)?,
            },
            MessageType::IdleEvent => ChatEvent::MemberIdled {
                connection_id,
                payload: PresencePayload::from_value(inbound.payload)?,
            },
            MessageType::PublishEvent => ChatEvent::MessagePublished {
                connection_id,
                payload: inbound.payload,
            },
            MessageType::HistoryEvent => ChatEvent::HistoryRequested { connection_id },
            MessageType::GetMembersEvent => ChatEvent::MembersRequested { connection_id },
            // Server-only event
            MessageType::ErrorEvent => return Err(AppError::UnknownEvent(inbound.message_type)),
        };

        Ok(event)
    }
}

#[async_trait]
impl MessageHandler for WebsocketReceiveHandler {
    async fn handle_message(&self, connection_id: ConnectionId, message: String) {
        debug!(
            connection_id = %connection_id,
            message = %message,
            "Received message"
        );

        let event = match Self::parse_event(connection_id, &message) {
            Ok(event) => event,
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Rejected WebSocket message"
                );
                ChatEvent::InvalidMessage {
                    connection_id,
                    reason: e.to_string(),
                }
            }
        };

        self.event_bus.emit(event).await;
    }
}

/// WebSocket endpoint
///
/// GET /ws
/// Every upgraded socket joins the single shared room
#[instrument(name = "websocket_handler", skip(ws, app_state))]
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    info!("WebSocket connection requested");
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(socket: axum::extract::ws::WebSocket, app_state: AppState) {
    serve_connection(Box::new(socket), app_state).await;
}

/// Register the socket, run it until disconnect, then deregister it
async fn serve_connection(socket: Box<dyn SocketWrapper>, app_state: AppState) {
    let connection_id = ConnectionId::new();

    info!(connection_id = %connection_id, "WebSocket connection established");

    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    app_state
        .connection_manager
        .add_connection(connection_id, outbound_sender)
        .await;

    let message_handler = Arc::new(WebsocketReceiveHandler::new(app_state.event_bus.clone()));

    let connection = Connection::new(
        connection_id,
        socket,
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(connection_id = %connection_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                error = %e,
                "WebSocket connection error"
            );
        }
    }

    // Presence is left untouched; only an explicit exitEvent marks a member inactive
    app_state
        .connection_manager
        .remove_connection(&connection_id)
        .await;

    info!(connection_id = %connection_id, "WebSocket connection removed");
}
