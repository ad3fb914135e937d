//! Compose message model.

use unibox_core::Backend;

/// Option shown in the compose backend picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendChoice {
    /// Index of the backend in the configured backend list.
    pub index: usize,
    /// Base URL, shown alongside the index.
    pub base_url: String,
}

impl BackendChoice {
    /// Build picker options for the configured backends.
    #[must_use]
    pub fn list(backends: &[Backend]) -> Vec<Self> {
        backends
            .iter()
            .enumerate()
            .map(|(index, backend)| Self {
                index,
                base_url: backend.base_url.clone(),
            })
            .collect()
    }
}

impl std::fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Backend #{} - {}", self.index, self.base_url)
    }
}

/// State for the new-message form.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    /// Target backend.
    pub backend: Option<BackendChoice>,
    /// Destination phone number.
    pub phone_number: String,
    /// Message body.
    pub body: String,
    /// Whether we're currently sending.
    pub is_sending: bool,
    /// Status line: "Sending new message...", the backend's raw response
    /// text, or "Error: ...".
    pub status: Option<String>,
}

impl ComposeState {
    /// Creates a new empty compose state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compose state with the first backend preselected.
    #[must_use]
    pub fn with_default_backend(backends: &[Backend]) -> Self {
        Self {
            backend: BackendChoice::list(backends).into_iter().next(),
            ..Self::default()
        }
    }

    /// Validates the compose form.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.backend.is_none() {
            return Some("Please choose a backend".to_string());
        }
        if self.phone_number.trim().is_empty() {
            return Some("Please enter a phone number".to_string());
        }
        if self.body.trim().is_empty() {
            return Some("Please enter a message".to_string());
        }
        None
    }

    /// Clears the inputs after a successful send, keeping the backend.
    pub fn clear_after_send(&mut self) {
        self.phone_number.clear();
        self.body.clear();
    }
}
