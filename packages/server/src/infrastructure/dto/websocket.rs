//! WebSocket message DTOs.
//!
//! Every frame is a JSON object of the form `{"type": ..., "payload": {...}}`.

use serde::{Deserialize, Serialize};

/// Directive sent by a client
///
/// Anything that does not match one of these variants (unknown `type`,
/// missing fields, invalid JSON) fails to deserialize and is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ClientMessage {
    Join(JoinPayload),
    Chat(ChatPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPayload {
    pub username: String,
    pub room_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatPayload {
    pub message: String,
}

/// Event pushed to a client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ServerMessage {
    Chat(ChatBroadcastPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatBroadcastPayload {
    pub message: String,
    /// Sender's display name, resolved server-side from the registry
    pub username: String,
}
