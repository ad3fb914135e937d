//! Inbox aggregation service.
//!
//! Fetches message previews from every configured backend, flattens them in
//! backend order, and floats unresponded conversations to the top. Also
//! provides conversation fetch and outbound send against a single backend.

use futures::future::try_join_all;
use tracing::debug;

use unibox_rest::{BackendClient, ConversationMessage, MessagePreview, SendMessageRequest};

use crate::backend::Backend;

/// Errors that can occur during inbox service operations.
#[derive(Debug, thiserror::Error)]
pub enum InboxServiceError {
    /// A request to a backend failed.
    #[error("request to {base_url} failed: {source}")]
    Request {
        /// Base URL of the failing backend.
        base_url: String,
        /// Underlying client error.
        #[source]
        source: unibox_rest::Error,
    },
}

impl InboxServiceError {
    fn request(base_url: &str, source: unibox_rest::Error) -> Self {
        Self::Request {
            base_url: base_url.to_string(),
            source,
        }
    }
}

/// A message preview tagged with the backend it came from.
///
/// The index refers to the position of the backend in the configured list,
/// which is how the conversation and send operations find their target.
#[derive(Debug, Clone)]
pub struct InboxEntry {
    /// The preview as returned by the backend.
    pub preview: MessagePreview,
    /// Index of the owning backend in the configured backend list.
    pub backend_index: usize,
    /// Base URL of the owning backend.
    pub backend_url: String,
}

impl InboxEntry {
    /// Whether the preview still awaits a reply (unread and not from you).
    #[must_use]
    pub const fn is_unresponded(&self) -> bool {
        self.preview.is_unresponded()
    }
}

/// Load the unified inbox from every configured backend.
///
/// The per-backend requests run concurrently and the first failure fails the
/// whole load; callers keep their previous list in that case. Successful
/// results are flattened in backend order and sorted unresponded-first.
///
/// # Errors
///
/// Returns an error if any backend request fails or returns invalid data.
pub async fn load_inbox(backends: &[Backend]) -> Result<Vec<InboxEntry>, InboxServiceError> {
    let fetches = backends.iter().enumerate().map(|(index, backend)| {
        let client = BackendClient::new(&backend.base_url);
        async move {
            let previews = client
                .messages()
                .await
                .map_err(|e| InboxServiceError::request(client.base_url(), e))?;

            let entries: Vec<InboxEntry> = previews
                .into_iter()
                .map(|preview| InboxEntry {
                    preview,
                    backend_index: index,
                    backend_url: client.base_url().to_string(),
                })
                .collect();
            Ok::<_, InboxServiceError>(entries)
        }
    });

    let per_backend = try_join_all(fetches).await?;
    let mut entries: Vec<InboxEntry> = per_backend.into_iter().flatten().collect();
    sort_unresponded_first(&mut entries);

    debug!(
        "loaded {} previews from {} backends",
        entries.len(),
        backends.len()
    );
    Ok(entries)
}

/// Float unresponded entries to the top of the list.
///
/// The sort is stable: relative order within the unresponded and responded
/// groups is preserved, so entries keep their backend fetch order.
pub fn sort_unresponded_first(entries: &mut [InboxEntry]) {
    entries.sort_by_key(|entry| !entry.is_unresponded());
}

/// Load the conversation thread for one phone number from its backend.
///
/// # Errors
///
/// Returns an error if the backend request fails or returns invalid data.
pub async fn load_conversation(
    backend: &Backend,
    phone: &str,
) -> Result<Vec<ConversationMessage>, InboxServiceError> {
    let client = BackendClient::new(&backend.base_url);
    client
        .conversation(phone)
        .await
        .map_err(|e| InboxServiceError::request(client.base_url(), e))
}

/// Send a new outbound message through a backend.
///
/// Returns the backend's raw response text, displayed verbatim as the
/// compose status line.
///
/// # Errors
///
/// Returns an error if the backend request fails.
pub async fn send_message(
    backend: &Backend,
    phone: &str,
    text: &str,
) -> Result<String, InboxServiceError> {
    let client = BackendClient::new(&backend.base_url);
    client
        .send_message(&SendMessageRequest::new(phone, text))
        .await
        .map_err(|e| InboxServiceError::request(client.base_url(), e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Builds an entry whose original list position is encoded in
    /// `backend_index`, so stability can be checked after sorting.
    fn entry(position: usize, unread: bool, from_you: bool) -> InboxEntry {
        InboxEntry {
            preview: MessagePreview {
                phone_number: format!("+1555000{position:04}"),
                snippet: String::new(),
                timestamp: String::new(),
                unread,
                from_you,
            },
            backend_index: position,
            backend_url: "https://sms.example.com".to_string(),
        }
    }

    #[test]
    fn unresponded_entries_float_to_top() {
        let mut entries = vec![
            entry(0, false, false),
            entry(1, true, false),
            entry(2, true, true),
            entry(3, true, false),
        ];
        sort_unresponded_first(&mut entries);

        let order: Vec<usize> = entries.iter().map(|e| e.backend_index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn sort_of_empty_list_is_a_no_op() {
        let mut entries: Vec<InboxEntry> = Vec::new();
        sort_unresponded_first(&mut entries);
        assert!(entries.is_empty());
    }

    #[test]
    fn read_from_you_entries_are_not_urgent() {
        // `unread && fromYou` marks your own message the other side hasn't
        // seen yet; it must not float above incoming unread previews.
        let mut entries = vec![entry(0, true, true), entry(1, true, false)];
        sort_unresponded_first(&mut entries);
        assert_eq!(entries[0].backend_index, 1);
    }

    proptest! {
        #[test]
        fn sorted_list_is_partitioned_and_stable(
            flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..40)
        ) {
            let mut entries: Vec<InboxEntry> = flags
                .iter()
                .enumerate()
                .map(|(i, &(unread, from_you))| entry(i, unread, from_you))
                .collect();
            sort_unresponded_first(&mut entries);

            // Partitioned: no unresponded entry after a responded one.
            let boundary = entries
                .iter()
                .position(|e| !e.is_unresponded())
                .unwrap_or(entries.len());
            prop_assert!(entries[boundary..].iter().all(|e| !e.is_unresponded()));

            // Stable: original positions stay increasing within each group.
            for group in [&entries[..boundary], &entries[boundary..]] {
                for pair in group.windows(2) {
                    prop_assert!(pair[0].backend_index < pair[1].backend_index);
                }
            }
        }
    }
}
