//! Wire data types for the backend REST surface.
//!
//! Field names are camelCase on the wire. Backends are free to attach extra
//! fields to previews; those are ignored here, and absent non-key fields
//! fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Direction of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Sent by the user through this (or another) client.
    Outgoing,
    /// Received from the remote party. Unknown direction strings also land
    /// here, matching how backends treat anything but `"outgoing"`.
    #[default]
    Incoming,
}

impl Direction {
    /// Whether this message was sent by the user.
    #[must_use]
    pub const fn is_outgoing(self) -> bool {
        matches!(self, Self::Outgoing)
    }
}

/// Serde helpers for [`Direction`] (wire value is a plain string).
mod direction_serde {
    use super::Direction;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(direction: &Direction, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match direction {
            Direction::Outgoing => "outgoing",
            Direction::Incoming => "incoming",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Direction, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "outgoing" => Ok(Direction::Outgoing),
            _ => Ok(Direction::Incoming),
        }
    }
}

/// A summarized, unopened message entry shown in the inbox list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePreview {
    /// Phone number of the remote party.
    pub phone_number: String,
    /// Short excerpt of the latest message text.
    #[serde(default)]
    pub snippet: String,
    /// Timestamp string as supplied by the backend.
    #[serde(default)]
    pub timestamp: String,
    /// Whether the latest message is unread.
    #[serde(default)]
    pub unread: bool,
    /// Whether the latest message was sent by the user.
    #[serde(default)]
    pub from_you: bool,
}

impl MessagePreview {
    /// Whether this preview still awaits a reply: the latest message is
    /// unread and was not sent by the user. Unresponded previews sort to
    /// the top of the inbox.
    #[must_use]
    pub const fn is_unresponded(&self) -> bool {
        !self.from_you && self.unread
    }
}

/// One message within a conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    /// Message text.
    #[serde(default)]
    pub text: String,
    /// Timestamp string as supplied by the backend.
    #[serde(default)]
    pub time: String,
    /// Whether the message was sent or received.
    #[serde(default, with = "direction_serde")]
    pub direction: Direction,
}

/// JSON body for `POST /send-message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Destination phone number.
    pub phone_number: String,
    /// Message text to send.
    pub text: String,
}

impl SendMessageRequest {
    /// Create a request for the given destination and text.
    #[must_use]
    pub fn new(phone_number: &str, text: &str) -> Self {
        Self {
            phone_number: phone_number.to_string(),
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod preview_tests {
        use super::*;

        #[test]
        fn deserialize_camel_case() {
            let json = r#"{
                "phoneNumber": "+15551234567",
                "snippet": "see you at 3pm",
                "timestamp": "2026-08-01T14:02:00Z",
                "unread": true,
                "fromYou": false
            }"#;
            let preview: MessagePreview = serde_json::from_str(json).unwrap();
            assert_eq!(preview.phone_number, "+15551234567");
            assert_eq!(preview.snippet, "see you at 3pm");
            assert!(preview.unread);
            assert!(!preview.from_you);
        }

        #[test]
        fn absent_fields_default() {
            let json = r#"{"phoneNumber": "+15550000001"}"#;
            let preview: MessagePreview = serde_json::from_str(json).unwrap();
            assert!(preview.snippet.is_empty());
            assert!(preview.timestamp.is_empty());
            assert!(!preview.unread);
            assert!(!preview.from_you);
        }

        #[test]
        fn extra_fields_ignored() {
            let json = r#"{
                "phoneNumber": "+15550000001",
                "snippet": "hi",
                "carrier": "example",
                "messageCount": 12
            }"#;
            let preview: MessagePreview = serde_json::from_str(json).unwrap();
            assert_eq!(preview.snippet, "hi");
        }

        #[test]
        fn missing_phone_number_is_an_error() {
            let json = r#"{"snippet": "hi"}"#;
            assert!(serde_json::from_str::<MessagePreview>(json).is_err());
        }

        #[test]
        fn unresponded_requires_unread_and_not_from_you() {
            let mut preview: MessagePreview =
                serde_json::from_str(r#"{"phoneNumber": "+1", "unread": true}"#).unwrap();
            assert!(preview.is_unresponded());

            preview.from_you = true;
            assert!(!preview.is_unresponded());

            preview.from_you = false;
            preview.unread = false;
            assert!(!preview.is_unresponded());
        }
    }

    mod conversation_tests {
        use super::*;

        #[test]
        fn outgoing_direction() {
            let json = r#"{"text": "on my way", "time": "14:02", "direction": "outgoing"}"#;
            let message: ConversationMessage = serde_json::from_str(json).unwrap();
            assert_eq!(message.direction, Direction::Outgoing);
            assert!(message.direction.is_outgoing());
        }

        #[test]
        fn unknown_direction_falls_back_to_incoming() {
            let json = r#"{"text": "hey", "time": "14:01", "direction": "inbound"}"#;
            let message: ConversationMessage = serde_json::from_str(json).unwrap();
            assert_eq!(message.direction, Direction::Incoming);
        }

        #[test]
        fn absent_direction_is_incoming() {
            let json = r#"{"text": "hey"}"#;
            let message: ConversationMessage = serde_json::from_str(json).unwrap();
            assert_eq!(message.direction, Direction::Incoming);
            assert!(message.time.is_empty());
        }

        #[test]
        fn direction_round_trips() {
            let message = ConversationMessage {
                text: "ok".to_string(),
                time: "14:05".to_string(),
                direction: Direction::Outgoing,
            };
            let json = serde_json::to_string(&message).unwrap();
            assert!(json.contains(r#""direction":"outgoing""#));
        }
    }

    mod send_request_tests {
        use super::*;

        #[test]
        fn serializes_camel_case_body() {
            let request = SendMessageRequest::new("+15551234567", "hello there");
            let json = serde_json::to_string(&request).unwrap();
            assert_eq!(json, r#"{"phoneNumber":"+15551234567","text":"hello there"}"#);
        }
    }
}
