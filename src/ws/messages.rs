//! WebSocket message types: envelope, commands, and events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    #[serde(default)]
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp.
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WsMessage {
    /// Builds a server message stamped with the current time.
    #[must_use]
    pub fn new(id: impl Into<String>, msg_type: WsMessageType, payload: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            msg_type,
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Builds an error message with a numeric code.
    #[must_use]
    pub fn error(id: impl Into<String>, code: u32, message: &str) -> Self {
        Self::new(
            id,
            WsMessageType::Error,
            serde_json::json!({ "code": code, "message": message }),
        )
    }

    /// Serializes the envelope; `None` only if the payload cannot be
    /// represented as JSON.
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send over WebSocket, carried in the
/// envelope payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Subscribe to price quotes and room events. `"*"` in either list
    /// subscribes to everything of that kind.
    Subscribe {
        /// Token IDs whose quotes to receive.
        #[serde(default)]
        token_ids: Vec<String>,
        /// Room IDs whose events to receive.
        #[serde(default)]
        room_ids: Vec<String>,
    },
    /// Unsubscribe from tokens or rooms. `"*"` drops the wildcard.
    Unsubscribe {
        /// Token IDs to drop.
        #[serde(default)]
        token_ids: Vec<String>,
        /// Room IDs to drop.
        #[serde(default)]
        room_ids: Vec<String>,
    },
    /// Fetch the current state of one token.
    GetToken {
        /// Target token ID.
        token_id: String,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_command_parses_with_defaults() {
        let payload = serde_json::json!({ "command": "subscribe", "token_ids": ["atom"] });
        let Ok(cmd) = serde_json::from_value::<WsCommand>(payload) else {
            panic!("valid command");
        };
        assert_eq!(
            cmd,
            WsCommand::Subscribe {
                token_ids: vec!["atom".to_string()],
                room_ids: Vec::new(),
            }
        );
    }

    #[test]
    fn client_envelope_may_omit_timestamp() {
        let text = r#"{"id":"1","type":"command","payload":{"command":"get_token","token_id":"osmo"}}"#;
        let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
            panic!("valid envelope");
        };
        assert_eq!(msg.msg_type, WsMessageType::Command);
    }
}
