//! Conversation display model.

use unibox_rest::ConversationMessage;

/// Identifies the conversation currently open in the right pane.
///
/// In-flight fetch results carry their key and are discarded if the user has
/// switched conversations by the time they arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationKey {
    /// Phone number of the remote party.
    pub phone: String,
    /// Index of the owning backend in the configured backend list.
    pub backend_index: usize,
}

/// One rendered message bubble in the conversation pane.
#[derive(Debug, Clone)]
pub struct Bubble {
    /// Message text.
    pub text: String,
    /// Timestamp string, shown as received.
    pub time: String,
    /// Outgoing bubbles align right, incoming align left.
    pub outgoing: bool,
}

impl Bubble {
    /// Creates a bubble from core service data.
    #[must_use]
    pub fn from_core(message: &ConversationMessage) -> Self {
        Self {
            text: message.text.clone(),
            time: message.time.clone(),
            outgoing: message.direction.is_outgoing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unibox_rest::Direction;

    #[test]
    fn from_core_maps_direction() {
        let message = ConversationMessage {
            text: "on my way".to_string(),
            time: "14:02".to_string(),
            direction: Direction::Outgoing,
        };
        let bubble = Bubble::from_core(&message);
        assert!(bubble.outgoing);
        assert_eq!(bubble.time, "14:02");
    }
}
