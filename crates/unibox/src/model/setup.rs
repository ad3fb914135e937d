//! Backend setup form model.

use unibox_core::{Backend, ValidationError, validate_backend};

/// State for the backend setup form.
#[derive(Debug, Clone, Default)]
pub struct BackendSetupState {
    /// Display label (optional; derived from the host when empty).
    pub label: String,
    /// Base URL of the backend's REST API.
    pub base_url: String,
    /// Whether we're currently saving.
    pub is_saving: bool,
    /// Error message from validation or the save attempt.
    pub save_error: Option<String>,
}

impl BackendSetupState {
    /// Creates a new empty setup state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts the form fields into a backend record.
    #[must_use]
    pub fn to_backend(&self) -> Backend {
        let mut backend = Backend::with_base_url(self.base_url.trim());
        let label = self.label.trim();
        if !label.is_empty() {
            backend.label = label.to_string();
        }
        backend
    }

    /// Validates the form, storing the combined error message on failure.
    pub fn validate(&mut self) -> bool {
        match validate_backend(&self.to_backend()) {
            Ok(()) => {
                self.save_error = None;
                true
            }
            Err(errors) => {
                let combined = errors
                    .iter()
                    .map(ValidationError::message)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.save_error = Some(combined);
                false
            }
        }
    }
}
