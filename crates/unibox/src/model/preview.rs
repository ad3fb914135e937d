//! Preview display model.

use chrono::{DateTime, Local};

use unibox_core::InboxEntry;

use super::ConversationKey;

/// A preview row ready for display in the inbox list.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Phone number of the remote party.
    pub phone_number: String,
    /// Short excerpt of the latest message text.
    pub snippet: String,
    /// Timestamp, rendered in local time where parseable.
    pub timestamp: String,
    /// Whether the latest message is unread (rendered bold).
    pub unread: bool,
    /// Whether the latest message was sent by the user ("(You)" marker).
    pub from_you: bool,
    /// Index of the owning backend in the configured backend list.
    pub backend_index: usize,
}

impl PreviewEntry {
    /// Creates a preview row from core service data.
    #[must_use]
    pub fn from_core(entry: &InboxEntry) -> Self {
        Self {
            phone_number: entry.preview.phone_number.clone(),
            snippet: entry.preview.snippet.clone(),
            timestamp: format_timestamp_local(&entry.preview.timestamp),
            unread: entry.preview.unread,
            from_you: entry.preview.from_you,
            backend_index: entry.backend_index,
        }
    }

    /// The conversation this preview opens when clicked.
    #[must_use]
    pub fn key(&self) -> ConversationKey {
        ConversationKey {
            phone: self.phone_number.clone(),
            backend_index: self.backend_index,
        }
    }
}

/// Formats a backend timestamp for display in local time.
///
/// Backends send whatever their upstream produces; RFC 3339 and RFC 2822
/// are rendered in the local timezone, anything else is shown as received.
fn format_timestamp_local(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%a, %d %b %Y %H:%M").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        let local: DateTime<Local> = dt.with_timezone(&Local);
        return local.format("%a, %d %b %Y %H:%M").to_string();
    }

    raw.to_string()
}
